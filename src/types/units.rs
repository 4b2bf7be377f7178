//! Fixed-point price and volume units.
//!
//! Prices and volumes are scaled integers with two implied decimal places:
//! one raw unit is one hundredth of the quoted value. Integer representation
//! keeps ladder ordering and fill arithmetic exact; the book never compares
//! floating-point values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Number of raw units per whole quoted unit (two implied decimals).
pub(crate) const SCALE: u64 = 100;

/// A price on the book, in raw fixed-point units.
///
/// `Price::from_f64(5.0)` and `Price::new(500)` are the same price.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero price. Market orders carry it; it is not a valid limit price.
    pub const ZERO: Price = Price(0);

    /// Create a price from raw fixed-point units.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Price(raw)
    }

    /// Create a price from a decimal quote, rounded to the nearest raw unit.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        Price((value * SCALE as f64).round() as u64)
    }

    /// The raw fixed-point value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The price as a decimal quote.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// True for the zero price.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Difference from `other`, saturating at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Price) -> Price {
        Price(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE)
    }
}

/// An order volume, in raw fixed-point units (two implied decimals).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Volume(u64);

impl Volume {
    /// The zero volume.
    pub const ZERO: Volume = Volume(0);

    /// Create a volume from raw fixed-point units.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Volume(raw)
    }

    /// Create a volume from a decimal quantity, rounded to the nearest raw unit.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        Volume((value * SCALE as f64).round() as u64)
    }

    /// The raw fixed-point value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The volume as a decimal quantity.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// True for the zero volume.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Difference from `other`, saturating at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Volume) -> Volume {
        Volume(self.0.saturating_sub(other.0))
    }
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Volume {
    fn add_assign(&mut self, rhs: Volume) {
        *self = *self + rhs;
    }
}

impl Sub for Volume {
    type Output = Volume;

    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Volume {
    fn sum<I: Iterator<Item = Volume>>(iter: I) -> Volume {
        iter.fold(Volume::ZERO, |acc, v| acc + v)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE)
    }
}
