use crate::expression::ast::{Arena, Node, NodeId};
use crate::expression::error::ExprError;
use crate::expression::lexer::{Token, tokenize};
use crate::expression::ops::{MAX_ARITY, OpCode};

/// Variable alphabet used by the range transform: `x` position, `r` pass
/// flag, `y` mirrored position.
pub const TRANSFORM_ALPHABET: &str = "xry";

/// Ordered set of single-letter variable names.
///
/// The letter at position `i` binds to `vars[i]` at evaluation time. Matching
/// is case-insensitive; when a letter repeats, the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from ASCII letters, e.g. `"xry"`.
    pub fn new(letters: &str) -> Result<Self, ExprError> {
        let mut out = Vec::with_capacity(letters.len());
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                tracing::debug!(letter = %c, "variable alphabet accepts ASCII letters only");
                return Err(ExprError);
            }
            out.push(c.to_ascii_lowercase());
        }
        Ok(Self { letters: out })
    }

    /// Number of letters (and of values `eval` expects).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Return `true` for the empty alphabet.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Slot bound to a lowercased single-character token.
    pub fn position(&self, token: &str) -> Option<usize> {
        let mut chars = token.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        self.letters.iter().position(|&l| l == c)
    }
}

/// A compiled expression: its node arena and the root node.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub(crate) arena: Arena,
    pub(crate) root: NodeId,
    pub(crate) var_count: usize,
}

impl Program {
    /// Tokenize and compile `src` against the letters of `alphabet`.
    pub fn compile(src: &str, alphabet: &str) -> Result<Self, ExprError> {
        let alphabet = Alphabet::new(alphabet)?;
        Compiler::new().compile(&tokenize(src), &alphabet)
    }

    /// Node arena.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Root node; always the last node of the arena.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Size of the alphabet the program was compiled against.
    pub fn var_count(&self) -> usize {
        self.var_count
    }
}

/// Postfix (RPN) compiler.
///
/// Tokens are consumed from the end of the sequence: an operator token is
/// followed (right to left) by its operands, last operand first. Each
/// operand is stored back in its left-to-right slot, so `a b c ?` has
/// children `[a, b, c]`. Nesting depth maps to recursion depth.
#[derive(Debug, Default)]
pub struct Compiler {
    arena: Arena,
}

impl Compiler {
    /// New compiler with an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a full token sequence. Every token must be consumed exactly
    /// once; the compiler can be reused after success or failure.
    pub fn compile(&mut self, tokens: &[Token], alphabet: &Alphabet) -> Result<Program, ExprError> {
        self.arena.clear();

        let mut pos = tokens.len();
        let root = self.parse_rec(tokens, alphabet, &mut pos)?;
        if pos > 0 {
            tracing::debug!(
                leftover = pos,
                token = %tokens[pos - 1].text,
                "tokens left after a complete expression"
            );
            return Err(ExprError);
        }

        debug_assert_eq!(self.arena.last_id(), Some(root));
        Ok(Program {
            arena: std::mem::take(&mut self.arena),
            root,
            var_count: alphabet.len(),
        })
    }

    fn parse_rec(
        &mut self,
        tokens: &[Token],
        alphabet: &Alphabet,
        pos: &mut usize,
    ) -> Result<NodeId, ExprError> {
        let Some(next) = pos.checked_sub(1) else {
            tracing::debug!("expression ran out of operands");
            return Err(ExprError);
        };
        *pos = next;
        let tok = &tokens[next];

        if let Ok(v) = tok.text.parse::<f64>() {
            return Ok(self.arena.push(Node::Literal(v)));
        }

        if let Some(index) = alphabet.position(&tok.text) {
            return Ok(self.arena.push(Node::Variable(index)));
        }

        if let Some(code) = OpCode::from_symbol(&tok.text) {
            let mut args = [NodeId::default(); MAX_ARITY];
            for slot in (0..code.arity()).rev() {
                args[slot] = self.parse_rec(tokens, alphabet, pos)?;
            }
            return Ok(self.arena.push(Node::Operator { code, args }));
        }

        tracing::debug!(token = %tok.text, offset = tok.offset, "unrecognized expression token");
        Err(ExprError)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/parser.rs"]
mod tests;
