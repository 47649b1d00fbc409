//! Progress value and range handling

use std::fmt;

use serde::Deserialize;

/// Lowest valid progress
pub const MIN_PROGRESS: u8 = 0;

/// Highest valid progress
pub const MAX_PROGRESS: u8 = 100;

/// Errors produced when a raw value cannot become a [`Progress`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("Progress {value} is outside [0, 100]")]
    InvalidRange { value: i32 },
}

/// How out-of-range input is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Pull the value into [0, 100]
    #[default]
    Clamp,
    /// Reject anything outside [0, 100]
    Strict,
}

impl RangePolicy {
    /// Turn a raw value into a [`Progress`] according to this policy
    pub fn apply(self, value: i32) -> Result<Progress, ProgressError> {
        match self {
            RangePolicy::Clamp => Ok(Progress::clamped(value)),
            RangePolicy::Strict => Progress::new(value),
        }
    }
}

/// A progress value, always within [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Progress(u8);

impl Progress {
    /// Value shown when a screen first comes up
    pub const DEFAULT: Progress = Progress(50);

    pub const MIN: Progress = Progress(MIN_PROGRESS);
    pub const MAX: Progress = Progress(MAX_PROGRESS);

    /// Validate a raw value without altering it
    pub fn new(value: i32) -> Result<Self, ProgressError> {
        if (MIN_PROGRESS as i32..=MAX_PROGRESS as i32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ProgressError::InvalidRange { value })
        }
    }

    /// Clamp any integer into range
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(MIN_PROGRESS as i32, MAX_PROGRESS as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Share of the full track covered, in [0.0, 1.0]
    pub fn fraction(self) -> f32 {
        self.0 as f32 / MAX_PROGRESS as f32
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Progress> for u8 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
