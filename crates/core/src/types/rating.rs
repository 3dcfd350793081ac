//! Review rating on a one-to-five star scale.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// No stars were selected.
    #[error("rating is required")]
    Missing,
    /// The value is above the top of the scale.
    #[error("rating must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Rejected value.
        value: u8,
        /// Lowest allowed rating.
        min: u8,
        /// Highest allowed rating.
        max: u8,
    },
}

/// A star rating between [`Rating::MIN`] and [`Rating::MAX`] inclusive.
///
/// ```
/// use chapter_two_core::Rating;
///
/// assert!(Rating::new(5).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Validate a star count.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::Missing` for zero and `RatingError::OutOfRange`
    /// for anything above five.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value == 0 {
            return Err(RatingError::Missing);
        }
        if value > Self::MAX {
            return Err(RatingError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Rating::new(0), Err(RatingError::Missing));
        assert_eq!(Rating::new(1).unwrap().stars(), 1);
        assert_eq!(Rating::new(5).unwrap().stars(), 5);
        assert!(matches!(
            Rating::new(6),
            Err(RatingError::OutOfRange { value: 6, .. })
        ));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.stars(), 4);
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::new(3).unwrap().to_string(), "3/5");
    }
}
