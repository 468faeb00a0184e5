//! Loyalty point amounts.

use core::fmt;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Points awarded for every check-in.
pub const POINTS_PER_CHECKIN: Points = Points::new(10);

/// A non-negative amount of loyalty points.
///
/// Used both for the award attached to a single check-in and for a
/// customer's running balance.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    /// Zero points, the balance of a customer with no check-ins.
    pub const ZERO: Self = Self(0);

    /// Create a new point amount.
    #[must_use]
    pub const fn new(points: u64) -> Self {
        Self(points)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Points {
    fn from(points: u64) -> Self {
        Self(points)
    }
}
