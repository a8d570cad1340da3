// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};

use crate::{limb, BigInt, BigIntError, Result};

fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.negative == rhs.negative {
        return BigInt::from_parts(lhs.negative, limb::add(&lhs.magnitude, &rhs.magnitude));
    }
    // Mixed signs: the larger magnitude is always the minuend.
    match limb::cmp(&lhs.magnitude, &rhs.magnitude) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => {
            BigInt::from_parts(lhs.negative, limb::sub(&lhs.magnitude, &rhs.magnitude))
        }
        Ordering::Less => {
            BigInt::from_parts(rhs.negative, limb::sub(&rhs.magnitude, &lhs.magnitude))
        }
    }
}

fn sub(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.negative != rhs.negative {
        return BigInt::from_parts(lhs.negative, limb::add(&lhs.magnitude, &rhs.magnitude));
    }
    match limb::cmp(&lhs.magnitude, &rhs.magnitude) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => {
            BigInt::from_parts(lhs.negative, limb::sub(&lhs.magnitude, &rhs.magnitude))
        }
        Ordering::Less => {
            BigInt::from_parts(!lhs.negative, limb::sub(&rhs.magnitude, &lhs.magnitude))
        }
    }
}

fn mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    BigInt::from_parts(
        lhs.negative != rhs.negative,
        limb::mul(&lhs.magnitude, &rhs.magnitude),
    )
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.magnitude)
    }
}

impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the
    /// remainder takes the sign of the dividend.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    pub(crate) fn div_rem_nonzero(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        let (quotient, rem) = limb::div_rem(&self.magnitude, &divisor.magnitude);
        (
            BigInt::from_parts(self.negative != divisor.negative, quotient),
            BigInt::from_parts(self.negative, rem),
        )
    }

    #[inline]
    pub fn divide(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    #[inline]
    pub fn remainder(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, rem)| rem)
    }

    /// Euclidean residue in `[0, |modulus|)`.
    pub fn modulo(&self, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.reduce(modulus))
    }

    /// `modulo` for a modulus already known to be non-zero.
    pub(crate) fn reduce(&self, modulus: &BigInt) -> BigInt {
        let (_, rem) = limb::div_rem(&self.magnitude, &modulus.magnitude);
        let rem = BigInt::from_parts(false, rem);
        if self.negative && !rem.is_zero() {
            &modulus.abs() - &rem
        } else {
            rem
        }
    }

    /// `self^exponent`.
    pub fn pow(&self, exponent: u32) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }
        result
    }
}
