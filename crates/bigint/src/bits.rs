// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::ops::{Shl, Shr};

use crate::{limb, BigInt};

impl BigInt {
    /// Shifts the magnitude left; a negative amount shifts right.
    ///
    /// The sign is kept, so `-5 >> 1 == -2`.
    pub fn shift_left(&self, amount: i64) -> BigInt {
        let distance = amount.unsigned_abs() as usize;
        if amount < 0 {
            self.shr_magnitude(distance)
        } else {
            self.shl_magnitude(distance)
        }
    }

    /// Shifts the magnitude right; a negative amount shifts left.
    pub fn shift_right(&self, amount: i64) -> BigInt {
        let distance = amount.unsigned_abs() as usize;
        if amount < 0 {
            self.shl_magnitude(distance)
        } else {
            self.shr_magnitude(distance)
        }
    }

    /// Tests a bit of the magnitude.
    #[inline]
    pub fn test_bit(&self, index: usize) -> bool {
        limb::test_bit(&self.magnitude, index)
    }

    /// Index of the lowest set bit, `None` for zero.
    pub fn lowest_set_bit(&self) -> Option<usize> {
        self.magnitude
            .iter()
            .position(|&limb| limb != 0)
            .map(|at| at * limb::LIMB_BITS + self.magnitude[at].trailing_zeros() as usize)
    }

    #[inline]
    fn shl_magnitude(&self, distance: usize) -> BigInt {
        BigInt::from_parts(self.negative, limb::shl(&self.magnitude, distance))
    }

    #[inline]
    fn shr_magnitude(&self, distance: usize) -> BigInt {
        BigInt::from_parts(self.negative, limb::shr(&self.magnitude, distance))
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, rhs: usize) -> BigInt {
        self.shl_magnitude(rhs)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, rhs: usize) -> BigInt {
        self.shl_magnitude(rhs)
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, rhs: usize) -> BigInt {
        self.shr_magnitude(rhs)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, rhs: usize) -> BigInt {
        self.shr_magnitude(rhs)
    }
}
