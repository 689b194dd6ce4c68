use std::fmt;

/// Which of the two frame spaces a mapping entry reads from.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// The clip being remapped (identity entries start here).
    #[default]
    Primary,
    /// The replacement/source clip; every parsed statement writes this.
    Alternate,
}

/// One output position of a mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MapIndex {
    /// Frame space the target belongs to.
    pub selector: Selector,
    /// Target frame index inside that space.
    pub frame: u32,
}

impl MapIndex {
    /// Identity entry for output position `frame`.
    pub fn primary(frame: u32) -> Self {
        Self {
            selector: Selector::Primary,
            frame,
        }
    }

    /// Entry pointing at `frame` of the alternate space.
    pub fn alternate(frame: u32) -> Self {
        Self {
            selector: Selector::Alternate,
            frame,
        }
    }
}

/// Inclusive integer range `[start, end]` as written in mapping text.
///
/// Ranges coming out of the parser are not validated; statements check
/// `start <= end` before they fill or interpolate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IntRange {
    /// Inclusive start.
    pub start: i32,
    /// Inclusive end.
    pub end: i32,
}

impl IntRange {
    /// Create a range without checking the bound order.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Single-value range.
    pub fn point(v: i32) -> Self {
        Self { start: v, end: v }
    }

    /// Return `true` when `start <= end`.
    pub fn is_ordered(self) -> bool {
        self.start <= self.end
    }

    /// Number of values in the range; zero when the bounds are inverted.
    pub fn len(self) -> u64 {
        if self.is_ordered() {
            (i64::from(self.end) - i64::from(self.start) + 1) as u64
        } else {
            0
        }
    }

    /// Return `true` when the range holds no value.
    pub fn is_empty(self) -> bool {
        !self.is_ordered()
    }

    /// Iterate the contained values in ascending order.
    pub fn iter(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

/// Renders `v` for a single value and `[start end]` otherwise.
impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "[{} {}]", self.start, self.end)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
