//! Sign enum.

use std::ops::Neg;

/// Negative, zero, or positive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative (-1).
    Neg,
    /// Zero (0).
    #[default]
    Zero,
    /// Positive (+1).
    Pos,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}

impl Sign {
    /// Returns an integer representation of the sign (-1, 0, or 1).
    pub const fn int(self) -> isize {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }

    /// Returns a floating-point representation of the sign (-1.0, 0.0, or
    /// 1.0).
    pub fn float(self) -> f32 {
        self.int() as f32
    }

    /// Returns whether the sign is zero.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }

    /// Returns whether the sign is positive or negative.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Iterates over all signs in ascending order.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Neg, Sign::Zero, Sign::Pos].into_iter()
    }
}
