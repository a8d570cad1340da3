// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! # Wallet BigInt
//!
//! Immutable arbitrary-precision signed integers for the wallet's curve
//! arithmetic.
//!
//! A [`BigInt`] is a sign plus a magnitude stored as little-endian 64-bit
//! limbs with no high zero limbs, so every value has exactly one
//! representation. Every operation returns a new value; nothing mutates a
//! `BigInt` after construction.
//!
//! ## Example
//!
//! ```rust
//! use wallet_bigint::BigInt;
//!
//! let p: BigInt = "0x61".parse().unwrap();
//! let inverse = BigInt::from(3).mod_inverse(&p).unwrap();
//! assert_eq!((&inverse * BigInt::from(3)).remainder(&p).unwrap(), BigInt::one());
//! ```

use core::cmp::Ordering;
use core::hash::Hash;

mod arith;
mod bits;
mod convert;
mod error;
mod limb;
mod modular;
mod prime;
mod radix;
mod random;

pub use error::{BigIntError, Result};
pub use modular::Modulus;

/// Arbitrary-precision signed integer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: Vec<u64>,
}

impl BigInt {
    /// The value zero.
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: Vec::new(),
    };

    /// Builds a value, restoring the canonical form (minimal limbs,
    /// non-negative zero).
    #[inline]
    pub(crate) fn from_parts(negative: bool, magnitude: Vec<u64>) -> Self {
        let magnitude = limb::normalize(magnitude);
        let negative = negative && !magnitude.is_empty();
        Self {
            negative,
            magnitude,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_parts(false, vec![1])
    }

    #[inline]
    pub fn two() -> Self {
        Self::from_parts(false, vec![2])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        !self.negative && self.magnitude.as_slice() == [1]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.magnitude.first().map_or(true, |limb| limb & 1 == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Position of the highest set bit of the magnitude plus one, 0 for zero.
    #[inline]
    pub fn bits(&self) -> usize {
        limb::bits(&self.magnitude)
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    #[inline]
    pub fn negate(&self) -> Self {
        Self::from_parts(!self.negative, self.magnitude.clone())
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => limb::cmp(&self.magnitude, &other.magnitude),
            (true, true) => limb::cmp(&other.magnitude, &self.magnitude),
        }
    }
}
