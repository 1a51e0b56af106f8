//! Dimension value object
//!
//! A length that is guaranteed finite, non-negative and small enough that
//! every area and volume built from it stays finite.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ShapeError, ShapeResult};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Dimension(f64);

impl Dimension {
    /// Largest accepted length. A cube of this edge has volume 1e300 and
    /// surface area 6e200, both below `f64::MAX`.
    pub const MAX: f64 = 1.0e100;

    /// Validate a raw value
    pub fn new(value: f64) -> ShapeResult<Self> {
        if !value.is_finite() {
            return Err(ShapeError::InvalidDimension {
                input: value.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(ShapeError::InvalidDimension {
                input: value.to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        if value > Self::MAX {
            return Err(ShapeError::InvalidDimension {
                input: format!("{:e}", value),
                reason: format!("must not exceed {:e}", Self::MAX),
            });
        }
        // Normalise -0.0 so it displays as "0"
        Ok(Self(value.abs()))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl FromStr for Dimension {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShapeError::InvalidDimension {
                input: s.to_string(),
                reason: "missing value".to_string(),
            });
        }
        let value: f64 = trimmed.parse().map_err(|_| ShapeError::InvalidDimension {
            input: trimmed.to_string(),
            reason: "not a number".to_string(),
        })?;
        Self::new(value).map_err(|err| match err {
            ShapeError::InvalidDimension { reason, .. } => ShapeError::InvalidDimension {
                input: trimmed.to_string(),
                reason,
            },
            other => other,
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Dimension> for f64 {
    fn from(d: Dimension) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!("10".parse::<Dimension>().unwrap().get(), 10.0);
        assert_eq!(" 2.5 ".parse::<Dimension>().unwrap().get(), 2.5);
        assert_eq!("0".parse::<Dimension>().unwrap().get(), 0.0);
    }

    #[test]
    fn rejects_negative() {
        let err = "-1".parse::<Dimension>().unwrap_err();
        assert_eq!(err.to_string(), "invalid dimension '-1': must not be negative");
    }

    #[test]
    fn rejects_non_finite() {
        assert!("inf".parse::<Dimension>().is_err());
        assert!("NaN".parse::<Dimension>().is_err());
        assert!(Dimension::new(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_values_whose_area_would_overflow() {
        let err = "1e200".parse::<Dimension>().unwrap_err();
        assert_eq!(err.to_string(), "invalid dimension '1e200': must not exceed 1e100");
        assert!(Dimension::new(f64::MAX).is_err());
    }

    #[test]
    fn accepts_the_maximum() {
        assert_eq!("1e100".parse::<Dimension>().unwrap().get(), Dimension::MAX);
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!("ten".parse::<Dimension>().is_err());
        assert!("".parse::<Dimension>().is_err());
    }

    #[test]
    fn negative_zero_displays_as_zero() {
        assert_eq!(Dimension::new(-0.0).unwrap().to_string(), "0");
    }
}
