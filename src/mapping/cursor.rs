use crate::foundation::core::IntRange;
use crate::mapping::error::ParseErrorKind;

/// Scanner over one line of mapping text.
///
/// Every `match_*` method skips leading whitespace, records the column it
/// started at, and only advances when it matches.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    column: u32,
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self {
            bytes: line.as_bytes(),
            pos: 0,
            column: 1,
        }
    }

    /// Column of the last match attempt.
    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    fn mark(&mut self) {
        self.column = u32::try_from(self.pos + 1).unwrap_or(u32::MAX);
    }

    /// Return `true` when only whitespace is left. Does not move.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.bytes[self.pos..].iter().all(|&b| is_space(b))
    }

    pub(crate) fn match_char(&mut self, c: u8) -> bool {
        self.skip_whitespace();
        self.mark();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// `#` up to the end of the line.
    pub(crate) fn match_comment(&mut self) -> bool {
        if self.match_char(b'#') {
            self.pos = self.bytes.len();
            true
        } else {
            false
        }
    }

    /// Optionally signed decimal integer. Values reaching `i32::MIN` or
    /// `i32::MAX` are reported as [`ParseErrorKind::Overflow`].
    pub(crate) fn match_int(&mut self) -> Result<Option<i32>, ParseErrorKind> {
        self.skip_whitespace();
        self.mark();

        let mut i = self.pos;
        let negative = match self.bytes.get(i) {
            Some(b'-') => {
                i += 1;
                true
            }
            Some(b'+') => {
                i += 1;
                false
            }
            _ => false,
        };

        let digits_start = i;
        let mut magnitude: i64 = 0;
        while let Some(&b) = self.bytes.get(i) {
            if !b.is_ascii_digit() {
                break;
            }
            magnitude = magnitude
                .saturating_mul(10)
                .saturating_add(i64::from(b - b'0'));
            i += 1;
        }
        if i == digits_start {
            return Ok(None);
        }

        let value = if negative { -magnitude } else { magnitude };
        if value <= i64::from(i32::MIN) || value >= i64::from(i32::MAX) {
            return Err(ParseErrorKind::Overflow);
        }

        self.pos = i;
        Ok(Some(value as i32))
    }

    /// `[<int> <int>]`. Restores the cursor when the form does not match.
    pub(crate) fn match_range(&mut self) -> Result<Option<IntRange>, ParseErrorKind> {
        let saved = self.pos;
        if self.match_char(b'[') {
            if let Some(start) = self.match_int()? {
                if let Some(end) = self.match_int()? {
                    if self.match_char(b']') {
                        return Ok(Some(IntRange::new(start, end)));
                    }
                }
            }
        }
        self.pos = saved;
        Ok(None)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/cursor.rs"]
mod tests;
