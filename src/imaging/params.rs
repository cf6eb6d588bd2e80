//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the high-level [`operations`](super::operations) module (which decides the
//! search policy) and the [`backend`](super::backend) (which does the pixel
//! and codec work).
//!
//! ## Types
//!
//! - [`Quality`]: JPEG encoding quality (1–100). Clamped on construction.
//! - [`QualitySearch`]: descending quality ladder: start level and step, down to an exclusive floor of 0.

/// Quality setting for lossy JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// The ladder of quality levels tried when fitting a JPEG into a budget.
///
/// Levels start at `start` and decrease by `step` while they stay above
/// zero, so the default ladder is 80, 75, …, 10, 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualitySearch {
    start: u8,
    step: u8,
}

impl QualitySearch {
    pub const DEFAULT_START: u8 = 80;
    pub const DEFAULT_STEP: u8 = 5;

    /// `start` is clamped to 1–100 and `step` to at least 1, so every ladder
    /// has at least one level and terminates.
    pub fn new(start: u8, step: u8) -> Self {
        Self {
            start: start.clamp(1, 100),
            step: step.max(1),
        }
    }

    pub fn start(self) -> Quality {
        Quality(self.start)
    }

    /// The level after `current`, or `None` once the floor is reached.
    pub fn next_after(self, current: Quality) -> Option<Quality> {
        current
            .value()
            .checked_sub(self.step)
            .filter(|&q| q > 0)
            .map(Quality)
    }

    /// Every level of the ladder, highest first.
    pub fn levels(self) -> impl Iterator<Item = Quality> {
        std::iter::successors(Some(self.start()), move |&q| self.next_after(q))
    }
}

impl Default for QualitySearch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_STEP)
    }
}
