//! The 1-9 intensity-of-preference scale.

use serde::{Deserialize, Serialize};

use crate::SaatyError;

/// Ordered verbal descriptors for intensities 1 through 9.
///
/// Odd values are anchor levels; even values sit between adjacent anchors.
#[derive(Debug)]
pub struct Scale {
    descriptors: [&'static str; 9],
}

pub const SCALE: Scale = Scale {
    descriptors: [
        "1 - no preference",
        "2 - between 1 and 3",
        "3 - weak preference",
        "4 - between 3 and 5",
        "5 - strong preference",
        "6 - between 5 and 7",
        "7 - very strong preference",
        "8 - between 7 and 9",
        "9 - absolute preference",
    ],
};

impl Scale {
    /// Menu options, index `k` describing intensity `k + 1`.
    #[must_use]
    pub const fn options(&self) -> &[&'static str] {
        &self.descriptors
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn describe(&self, intensity: Intensity) -> &'static str {
        self.descriptors[usize::from(intensity.get() - 1)]
    }
}

/// Strength of preference between two elements, 1 (none) to 9 (absolute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Intensity = Intensity(1);
    pub const MAX: Intensity = Intensity(9);

    pub fn new(value: u8) -> Result<Self, SaatyError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SaatyError::invalid_argument(format!(
                "intensity {value} is outside 1..=9"
            )))
        }
    }

    /// Intensity for a confirmed scale menu index (`k` maps to `k + 1`).
    pub fn from_scale_index(index: usize) -> Result<Self, SaatyError> {
        let value = u8::try_from(index)
            .ok()
            .and_then(|k| k.checked_add(1))
            .ok_or_else(|| {
                SaatyError::invalid_argument(format!("scale index {index} is out of range"))
            })?;
        Self::new(value)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = SaatyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

/// Which element of a compared pair the operator prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    First,
    Second,
}

impl Preference {
    /// Maps the direction menu index: 0 is the first element, 1 the second.
    pub fn from_menu_index(index: usize) -> Result<Self, SaatyError> {
        match index {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            other => Err(SaatyError::invalid_argument(format!(
                "direction index {other} is not 0 or 1"
            ))),
        }
    }
}
