//! Bounded "number of authors" parameter.

/// Smallest selectable author count.
pub const MIN_AUTHORS: u32 = 20;
/// Largest selectable author count.
pub const MAX_AUTHORS: u32 = 200;
/// Grid step between selectable author counts.
pub const AUTHOR_STEP: u32 = 20;

/// Author count constrained to the `[MIN_AUTHORS, MAX_AUTHORS]` range on the
/// `AUTHOR_STEP` grid.
///
/// Every input surface routes raw values through [`SampleSize::clamped`], so
/// the stored value is always a valid grid point no matter which widget
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleSize(u32);

impl SampleSize {
    /// Clamp a raw value to the valid range and snap it to the nearest grid step.
    pub fn clamped(raw: i64) -> Self {
        let bounded = raw.clamp(MIN_AUTHORS as i64, MAX_AUTHORS as i64) as u32;
        let offset = bounded - MIN_AUTHORS;
        let snapped = MIN_AUTHORS + ((offset + AUTHOR_STEP / 2) / AUTHOR_STEP) * AUTHOR_STEP;
        Self(snapped.min(MAX_AUTHORS))
    }

    /// Current author count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Replace the value with a clamped-and-snapped version of `raw`.
    pub fn set(&mut self, raw: i64) {
        *self = Self::clamped(raw);
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self(MIN_AUTHORS)
    }
}
