/// A whitespace-delimited word of an expression, already lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased token text.
    pub text: String,
    /// Byte offset of the first character in the source string.
    pub offset: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Seek,
    Inside,
}

/// Split `input` on whitespace, lowercasing every character copied into a
/// token. Never fails; empty or all-blank input yields no tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut state = State::Seek;
    let mut cur = Token {
        text: String::new(),
        offset: 0,
    };

    for (i, c) in input.char_indices() {
        match (state, c.is_whitespace()) {
            (State::Seek, true) => {}
            (State::Seek, false) => {
                cur.offset = i;
                cur.text.clear();
                cur.text.extend(c.to_lowercase());
                state = State::Inside;
            }
            (State::Inside, false) => cur.text.extend(c.to_lowercase()),
            (State::Inside, true) => {
                out.push(cur.clone());
                state = State::Seek;
            }
        }
    }

    if state == State::Inside {
        out.push(cur);
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/expression/lexer.rs"]
mod tests;
