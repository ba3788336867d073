use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

pub type ItemId = u64;

/// A calorie count, or not-a-number when the entered text had no leading digits.
///
/// Not-a-number is persisted as JSON `null` and poisons any sum it takes part in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calories(Option<i64>);

impl Calories {
    pub const NAN: Calories = Calories(None);

    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// Parse the leading integer of `text`.
    ///
    /// Leading whitespace and one sign character are accepted; anything after
    /// the first run of digits is ignored, so `"150kcal"` reads as 150.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        match digits[..end].parse::<i64>() {
            Ok(value) if negative => Self(Some(-value)),
            Ok(value) => Self(Some(value)),
            Err(_) => Self::NAN,
        }
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }
}

impl From<i64> for Calories {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl Add for Calories {
    type Output = Calories;

    /// Overflow is reported as not-a-number rather than wrapping.
    fn add(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => Self(a.checked_add(b)),
            _ => Self::NAN,
        }
    }
}

impl Sum for Calories {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Calories::new(0), |acc, c| acc + c)
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("NaN"),
        }
    }
}

/// One tracked food entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub calories: Calories,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, calories: Calories) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }

    /// Case-insensitive name comparison used for the uniqueness check.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
