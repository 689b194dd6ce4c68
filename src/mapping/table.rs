use crate::foundation::core::{IntRange, MapIndex};
use crate::mapping::error::ParseErrorKind;

/// Output-frame → source-frame table.
///
/// Entry `i` says which frame to show at output position `i`. Indexed
/// statements may only address existing entries; every written target must
/// lie in `[0, source_frames)`. In tolerant mode out-of-table inputs are
/// skipped and targets are clamped instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MappingTable {
    entries: Vec<MapIndex>,
    source_frames: u32,
}

impl MappingTable {
    /// `frames` identity entries (`i -> Primary i`), targets bounded by
    /// `source_frames`.
    pub fn identity(frames: u32, source_frames: u32) -> Self {
        Self {
            entries: (0..frames).map(MapIndex::primary).collect(),
            source_frames,
        }
    }

    /// Empty table for list mode.
    pub fn empty(source_frames: u32) -> Self {
        Self {
            entries: Vec::new(),
            source_frames,
        }
    }

    /// Declared number of source frames; the exclusive bound on targets.
    pub fn source_frames(&self) -> u32 {
        self.source_frames
    }

    /// Entries in output order.
    pub fn entries(&self) -> &[MapIndex] {
        &self.entries
    }

    /// Number of output frames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when there is no output frame.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for output frame `n`, with `n` clamped into the table.
    pub fn resolve(&self, n: i64) -> Option<MapIndex> {
        let last = self.entries.len().checked_sub(1)?;
        let i = usize::try_from(n.max(0)).unwrap_or(usize::MAX).min(last);
        Some(self.entries[i])
    }

    fn input_len(&self) -> i64 {
        self.entries.len() as i64
    }

    fn in_table(&self, i: i32) -> bool {
        (0..self.input_len()).contains(&i64::from(i))
    }

    fn in_bound(&self, j: i32) -> bool {
        (0..i64::from(self.source_frames)).contains(&i64::from(j))
    }

    fn clamp_target(&self, j: i64) -> u32 {
        let max = i64::from(self.source_frames.saturating_sub(1));
        j.clamp(0, max) as u32
    }

    fn write(&mut self, i: i64, target: u32) {
        self.entries[i as usize] = MapIndex::alternate(target);
    }

    /// Part of `range` that addresses existing entries.
    fn table_span(&self, range: IntRange) -> std::ops::RangeInclusive<i64> {
        let lo = i64::from(range.start).max(0);
        let hi = i64::from(range.end).min(self.input_len() - 1);
        lo..=hi
    }

    /// `i j`: output frame `i` shows source frame `j`.
    pub(crate) fn set_frame(&mut self, i: i32, j: i32, tolerant: bool) -> Result<(), ParseErrorKind> {
        if !self.in_table(i) {
            if !tolerant {
                return Err(ParseErrorKind::BadValue(i));
            }
            tracing::warn!(index = i, "mapping for a frame outside the table dropped");
            return Ok(());
        }
        if !self.in_bound(j) {
            if !tolerant {
                return Err(ParseErrorKind::BadValue(j));
            }
            tracing::warn!(frame = j, "target frame clamped");
        }
        let target = self.clamp_target(i64::from(j));
        self.write(i64::from(i), target);
        Ok(())
    }

    /// List mode: append one entry showing source frame `j`.
    pub(crate) fn append_frame(&mut self, j: i32, tolerant: bool) -> Result<(), ParseErrorKind> {
        let in_bound = self.in_bound(j);
        if !in_bound && (!tolerant || self.source_frames == 0) {
            return Err(ParseErrorKind::BadValue(j));
        }
        if !in_bound {
            tracing::warn!(frame = j, "target frame clamped");
        }
        self.entries
            .try_reserve(1)
            .map_err(|_| ParseErrorKind::OutOfMemory)?;
        self.entries
            .push(MapIndex::alternate(self.clamp_target(i64::from(j))));
        Ok(())
    }

    fn check_input_range(&self, range: IntRange, tolerant: bool) -> Result<(), ParseErrorKind> {
        if !tolerant && !self.in_table(range.start) {
            return Err(ParseErrorKind::BadValue(range.start));
        }
        if !tolerant && i64::from(range.end) >= self.input_len() {
            return Err(ParseErrorKind::BadValue(range.end));
        }
        if !range.is_ordered() {
            return Err(ParseErrorKind::BadValue(range.end));
        }
        Ok(())
    }

    /// `[a b] j`: every output frame in `a..=b` shows source frame `j`.
    pub(crate) fn fill_range(
        &mut self,
        range: IntRange,
        j: i32,
        tolerant: bool,
    ) -> Result<(), ParseErrorKind> {
        self.check_input_range(range, tolerant)?;
        if !tolerant && !self.in_bound(j) {
            return Err(ParseErrorKind::BadValue(j));
        }

        let target = self.clamp_target(i64::from(j));
        for i in self.table_span(range) {
            self.write(i, target);
        }
        Ok(())
    }

    /// `[a b] [c d]`: spread `c..=d` over `a..=b`.
    ///
    /// With `m` input frames the step is `(d - c ± 1) / m` (sign of `d - c`,
    /// `+` when equal) and input `a + k` shows `trunc(c + step * k)`, so
    /// equal-length ranges map one to one and reversed output ranges play
    /// backwards.
    pub(crate) fn set_range(
        &mut self,
        input: IntRange,
        output: IntRange,
        tolerant: bool,
    ) -> Result<(), ParseErrorKind> {
        self.check_input_range(input, tolerant)?;
        if !tolerant && !self.in_bound(output.start) {
            return Err(ParseErrorKind::BadValue(output.start));
        }
        if !tolerant && !self.in_bound(output.end) {
            return Err(ParseErrorKind::BadValue(output.end));
        }

        let m = input.len() as f64;
        let mut step = f64::from(output.end) - f64::from(output.start);
        step += if step < 0.0 { -1.0 } else { 1.0 };
        step /= m;

        for i in self.table_span(input) {
            let k = (i - i64::from(input.start)) as f64;
            let j = (f64::from(output.start) + step * k) as i64;
            let target = self.clamp_target(j);
            self.write(i, target);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/table.rs"]
mod tests;
