use std::io::{self, BufRead};

use crate::mapping::error::ParseErrorKind;

/// Supplies mapping text one line at a time.
///
/// Lines are returned without their `\n` terminator; `Ok(None)` signals end
/// of input.
pub trait LineSource {
    /// Read the next line.
    fn next_line(&mut self) -> Result<Option<String>, ParseErrorKind>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn next_line(&mut self) -> Result<Option<String>, ParseErrorKind> {
        (**self).next_line()
    }
}

/// Lines of an in-memory string.
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    rest: &'a str,
}

impl<'a> StrLines<'a> {
    /// Iterate the lines of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl LineSource for StrLines<'_> {
    fn next_line(&mut self) -> Result<Option<String>, ParseErrorKind> {
        if self.rest.is_empty() {
            return Ok(None);
        }
        let (line, rest) = match self.rest.split_once('\n') {
            Some((line, rest)) => (line, rest),
            None => (self.rest, ""),
        };
        self.rest = rest;
        Ok(Some(line.to_owned()))
    }
}

/// Lines of a buffered reader, e.g. an opened mapping file. Bytes that are
/// not UTF-8 are replaced with U+FFFD.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    /// Wrap `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Result<Option<String>, ParseErrorKind> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                // mapping syntax is ASCII, so lossy decoding only touches comments
                // or text that is malformed anyway
                Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) if e.kind() == io::ErrorKind::OutOfMemory => Err(ParseErrorKind::OutOfMemory),
            Err(e) => Err(ParseErrorKind::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/source.rs"]
mod tests;
