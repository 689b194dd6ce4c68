use std::io::BufRead;

use crate::config::{ParseOptions, TransformOptions};
use crate::expression::parser::{Program, TRANSFORM_ALPHABET};
use crate::foundation::core::IntRange;
use crate::foundation::error::{FramemapError, FramemapResult};
use crate::mapping::parser::MappingParser;
use crate::mapping::source::LineSource;

/// Number of variables the engine binds: `x`, `r` and `y`.
const TRANSFORM_VARS: usize = 3;

/// Rewrites frame ranges through a compiled expression.
///
/// The expression sees three variables, bound as in [`TRANSFORM_ALPHABET`]:
///
/// - `x`: the position being evaluated,
/// - `r`: the pass, `0` for the first boundary and `1` for the second,
/// - `y`: the opposite boundary in continuous mode, `x` again in discrete
///   mode.
///
/// Continuous mode evaluates only the two boundaries of each range. Discrete
/// mode evaluates every frame, grows runs of consecutive results in either
/// direction and returns the runs sorted, with overlapping ones merged.
#[derive(Clone, Copy, Debug)]
pub struct RangeTransform<'p> {
    program: &'p Program,
    half_open: bool,
    discrete: bool,
}

impl<'p> RangeTransform<'p> {
    /// Engine over `program`, which must not reference more than the three
    /// transform variables.
    pub fn new(program: &'p Program, half_open: bool, discrete: bool) -> FramemapResult<Self> {
        if program.var_count() > TRANSFORM_VARS {
            return Err(FramemapError::validation(format!(
                "transform expression binds {} variables, at most {TRANSFORM_VARS} are available",
                program.var_count()
            )));
        }
        Ok(Self {
            program,
            half_open,
            discrete,
        })
    }

    /// Return `true` when the upper bound of continuous ranges is exclusive.
    pub fn half_open(&self) -> bool {
        self.half_open
    }

    /// Return `true` when every frame is evaluated.
    pub fn discrete(&self) -> bool {
        self.discrete
    }

    /// Output ranges for one input statement. May be empty.
    pub fn map_range(&self, range: IntRange) -> Vec<IntRange> {
        if self.discrete {
            self.map_discrete(range)
        } else {
            self.map_continuous(range).into_iter().collect()
        }
    }

    fn eval(&self, x: f64, r: f64, y: f64) -> Option<i32> {
        round_frame(self.program.eval(&[x, r, y]))
    }

    fn map_discrete(&self, range: IntRange) -> Vec<IntRange> {
        let mut out = Vec::new();
        let mut pending: Option<IntRange> = None;

        for i in range.iter() {
            let x = f64::from(i);
            let Some(res) = self.eval(x, 0.0, x) else {
                continue;
            };
            if res < 0 {
                continue;
            }
            match pending {
                Some(ref mut p) if i64::from(res) == i64::from(p.end) + 1 => p.end = res,
                Some(ref mut p) if i64::from(res) == i64::from(p.start) - 1 => p.start = res,
                _ => {
                    out.extend(pending);
                    pending = Some(IntRange::point(res));
                }
            }
        }
        out.extend(pending);
        coalesce(out)
    }

    fn map_continuous(&self, range: IntRange) -> Option<IntRange> {
        let offset = i64::from(self.half_open);
        let beg = f64::from(range.start);
        let end = (i64::from(range.end) + offset) as f64;

        let mut lo = i64::from(self.eval(beg, 0.0, end)?);
        let mut hi = i64::from(self.eval(end, 1.0, beg)?);
        if hi < lo {
            std::mem::swap(&mut lo, &mut hi);
        }
        hi -= offset;
        if lo > hi || hi < 0 {
            return None;
        }
        // both fit: lo <= hi < i32::MAX
        Some(IntRange::new(lo.max(0) as i32, hi as i32))
    }
}

/// Sort ranges by start and merge the ones that overlap or touch.
fn coalesce(mut ranges: Vec<IntRange>) -> Vec<IntRange> {
    ranges.sort_unstable_by_key(|r| r.start);
    let mut out: Vec<IntRange> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match out.last_mut() {
            Some(last) if i64::from(r.start) <= i64::from(last.end) + 1 => {
                last.end = last.end.max(r.end);
            }
            _ => out.push(r),
        }
    }
    out
}

/// `floor(v + 0.5)` as a frame number; `None` for non-finite or
/// unrepresentable results.
fn round_frame(v: f64) -> Option<i32> {
    let r = (v + 0.5).floor();
    if r.is_finite() && r >= f64::from(i32::MIN) && r <= f64::from(i32::MAX) {
        Some(r as i32)
    } else {
        None
    }
}

/// Render ranges the way mapping text writes them, separated by a space.
pub fn format_ranges(ranges: &[IntRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transform every statement supplied by `source`.
///
/// Results of one line are joined by a space and lines by a newline. A line
/// holding statements that map to nothing still yields an empty line.
#[tracing::instrument(skip(source, program))]
pub fn transform<S: LineSource>(
    source: S,
    program: &Program,
    half_open: bool,
    discrete: bool,
) -> FramemapResult<String> {
    let engine = RangeTransform::new(program, half_open, discrete)?;
    let mut parser = MappingParser::new(source, ParseOptions::default());
    Ok(parser.parse_transform(&engine)?)
}

/// Compile `options.expr` over `x r y` and transform `mappings`.
pub fn transform_str(mappings: &str, options: &TransformOptions) -> FramemapResult<String> {
    let program = Program::compile(&options.expr, TRANSFORM_ALPHABET)?;
    let engine = RangeTransform::new(&program, options.half_open, options.discrete)?;
    let out = MappingParser::for_text(mappings, ParseOptions::default()).parse_transform(&engine)?;
    tracing::debug!(expr = %options.expr, len = out.len(), "transform done");
    Ok(out)
}

/// Same as [`transform_str`], reading mappings from `reader`.
pub fn transform_reader<R: BufRead>(
    reader: R,
    options: &TransformOptions,
) -> FramemapResult<String> {
    let program = Program::compile(&options.expr, TRANSFORM_ALPHABET)?;
    let engine = RangeTransform::new(&program, options.half_open, options.discrete)?;
    Ok(MappingParser::for_reader(reader, ParseOptions::default()).parse_transform(&engine)?)
}

/// Join the present parts with a single space. `None` when no part is
/// present.
pub fn merge<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out: Option<String> = None;
    for part in parts.into_iter().flatten() {
        match out.as_mut() {
            Some(s) => {
                s.push(' ');
                s.push_str(part);
            }
            None => out = Some(part.to_owned()),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/transform.rs"]
mod tests;
