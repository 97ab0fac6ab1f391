use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;
pub const RATING_STEP: f64 = 0.5;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("rating {0} is outside 0..=5")]
    OutOfRange(f64),
    #[error("rating {0} is not a multiple of 0.5")]
    OffStep(f64),
}

/// Star rating in `[0, 5]`.
///
/// Values entered through the editor are on a 0.5 grid. Stored values are
/// only range-checked so that hand-written datasets still load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Result<Self, RatingError> {
        let rating = Self::in_range(value)?;
        if (value / RATING_STEP).fract() != 0.0 {
            return Err(RatingError::OffStep(value));
        }
        Ok(rating)
    }

    fn in_range(value: f64) -> Result<Self, RatingError> {
        if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// One step up, saturating at 5.
    pub fn step_up(self) -> Self {
        Self(snap(self.0 + RATING_STEP).min(MAX_RATING))
    }

    /// One step down, saturating at 0.
    pub fn step_down(self) -> Self {
        Self(snap(self.0 - RATING_STEP).max(MIN_RATING))
    }

    /// Descending order helper for top-rated sorting.
    pub fn cmp_desc(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

fn snap(value: f64) -> f64 {
    (value / RATING_STEP).round() * RATING_STEP
}

impl Default for Rating {
    fn default() -> Self {
        Self(3.0)
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::in_range(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Five glyphs: full stars, one half star when the fraction is at least 0.5,
/// then empty stars.
pub fn render_stars(rating: Rating) -> String {
    let value = rating.value();
    let full = value.floor() as usize;
    let has_half = value.fract() >= 0.5;
    (1..=5)
        .map(|i| {
            if i <= full {
                FULL_STAR
            } else if i == full + 1 && has_half {
                HALF_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}
