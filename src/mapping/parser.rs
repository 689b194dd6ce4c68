use std::io::BufRead;

use crate::config::ParseOptions;
use crate::foundation::core::IntRange;
use crate::mapping::cursor::Cursor;
use crate::mapping::error::{ParseError, ParseErrorKind, Position};
use crate::mapping::source::{LineSource, ReaderLines, StrLines};
use crate::mapping::table::MappingTable;
use crate::transform::{RangeTransform, format_ranges};

/// Line-oriented parser for frame mapping text.
///
/// Grammar, one statement per line unless noted:
///
/// ```text
/// i j               output frame i shows source frame j
/// [a b] j           frames a..=b all show j
/// [a b] [c d]       frames a..=b show c..=d, interpolated
/// i i i ...         list mode: append entries
/// # comment         anywhere after the statements
/// ```
///
/// Parsing stops at the first error. Statements applied before the failure,
/// including earlier ones on the failing line, stay applied; the table is
/// never rolled back. [`MappingParser::position`] reports where parsing
/// stopped.
#[derive(Debug)]
pub struct MappingParser<S> {
    source: S,
    options: ParseOptions,
    pos: Position,
}

impl<'a> MappingParser<StrLines<'a>> {
    /// Parse mappings held in a string.
    pub fn for_text(text: &'a str, options: ParseOptions) -> Self {
        Self::new(StrLines::new(text), options)
    }
}

impl<R: BufRead> MappingParser<ReaderLines<R>> {
    /// Parse mappings read from `reader`.
    pub fn for_reader(reader: R, options: ParseOptions) -> Self {
        Self::new(ReaderLines::new(reader), options)
    }
}

impl<S: LineSource> MappingParser<S> {
    /// Parser over an arbitrary line source.
    pub fn new(source: S, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            pos: Position::default(),
        }
    }

    /// Current line and (approximate) column.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Current 1-based line number.
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    /// Current 1-based column number.
    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// Indexed mode: at most one `i j`, `[a b] j` or `[a b] [c d]`
    /// statement per line, applied to a pre-sized table.
    #[tracing::instrument(skip(self, table), fields(frames = table.len(), tolerant = self.options.tolerant))]
    pub fn parse(&mut self, table: &mut MappingTable) -> Result<(), ParseError> {
        let tolerant = self.options.tolerant;
        self.drive(|cur| {
            if let Some(i) = cur.match_int()? {
                let j = cur.match_int()?.ok_or(ParseErrorKind::Malformed)?;
                tracing::trace!(i, j, "single mapping");
                table.set_frame(i, j, tolerant)?;
            } else if let Some(input) = cur.match_range()? {
                if let Some(j) = cur.match_int()? {
                    tracing::trace!(?input, j, "range fill");
                    table.fill_range(input, j, tolerant)?;
                } else if let Some(output) = cur.match_range()? {
                    tracing::trace!(?input, ?output, "range map");
                    table.set_range(input, output, tolerant)?;
                } else {
                    return Err(ParseErrorKind::Malformed);
                }
            }
            Ok(())
        })
    }

    /// List mode: every integer appends one entry. Returns the resulting
    /// entry count.
    #[tracing::instrument(skip(self, table), fields(tolerant = self.options.tolerant))]
    pub fn parse_simple(&mut self, table: &mut MappingTable) -> Result<usize, ParseError> {
        let tolerant = self.options.tolerant;
        self.drive(|cur| {
            while let Some(j) = cur.match_int()? {
                table.append_frame(j, tolerant)?;
            }
            Ok(())
        })?;
        Ok(table.len())
    }

    /// Replace mode: integers and ranges, any number per line, each
    /// selecting the alternate frame at the same index.
    #[tracing::instrument(skip(self, table), fields(frames = table.len(), tolerant = self.options.tolerant))]
    pub fn parse_replace_simple(&mut self, table: &mut MappingTable) -> Result<(), ParseError> {
        let tolerant = self.options.tolerant;
        self.drive(|cur| {
            loop {
                let mut matched = false;
                if let Some(i) = cur.match_int()? {
                    table.set_frame(i, i, tolerant)?;
                    matched = true;
                }
                if let Some(r) = cur.match_range()? {
                    table.set_range(r, r, tolerant)?;
                    matched = true;
                }
                if !matched {
                    return Ok(());
                }
            }
        })
    }

    /// Transform mode: integers and ranges, any number per line, rewritten
    /// through `engine`. Results of one line are joined by a space. Every line
    /// holding a statement yields one output line, empty when nothing mapped;
    /// blank and comment-only lines yield none.
    #[tracing::instrument(skip(self, engine))]
    pub fn parse_transform(&mut self, engine: &RangeTransform<'_>) -> Result<String, ParseError> {
        let mut lines: Vec<String> = Vec::new();
        self.drive(|cur| {
            let mut line: Vec<IntRange> = Vec::new();
            let mut statements = 0usize;
            loop {
                let range = if let Some(i) = cur.match_int()? {
                    IntRange::point(i)
                } else if let Some(r) = cur.match_range()? {
                    if !r.is_ordered() {
                        return Err(ParseErrorKind::BadValue(r.end));
                    }
                    r
                } else {
                    break;
                };
                let mapped = engine.map_range(range);
                tracing::trace!(?range, ?mapped, "transformed");
                line.extend(mapped);
                statements += 1;
            }
            if statements > 0 {
                lines.push(format_ranges(&line));
            }
            Ok(())
        })?;
        Ok(lines.join("\n"))
    }

    fn drive<F>(&mut self, mut statements: F) -> Result<(), ParseError>
    where
        F: FnMut(&mut Cursor<'_>) -> Result<(), ParseErrorKind>,
    {
        loop {
            let line = match self.source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(()),
                Err(kind) => return Err(self.fail(kind)),
            };

            let mut cur = Cursor::new(&line);
            let res = statements(&mut cur).and_then(|()| {
                cur.match_comment();
                if cur.is_exhausted() {
                    Ok(())
                } else {
                    Err(ParseErrorKind::Malformed)
                }
            });
            self.pos.column = cur.column();
            if let Err(kind) = res {
                return Err(self.fail(kind));
            }

            tracing::debug!(line = self.pos.line, "line parsed");
            self.pos.line += 1;
        }
    }

    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        tracing::debug!(%kind, line = self.pos.line, column = self.pos.column, "mapping parse failed");
        ParseError::new(kind, self.pos)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/parser.rs"]
mod tests;
