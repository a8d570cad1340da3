// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::{BigInt, BigIntError, Result};

/// A positive modulus, fixed once validated.
///
/// Arithmetic through a `Modulus` cannot fail: every result is reduced into
/// `[0, m)`. Curve code keeps its field prime and group order in this form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modulus(BigInt);

impl Modulus {
    pub fn new(value: BigInt) -> Result<Self> {
        if !value.is_positive() {
            return Err(BigIntError::Domain("modulus must be positive"));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn bits(&self) -> usize {
        self.0.bits()
    }

    #[inline]
    pub fn reduce(&self, value: &BigInt) -> BigInt {
        value.reduce(&self.0)
    }

    /// Whether `value` already lies in `[0, m)`.
    #[inline]
    pub fn contains(&self, value: &BigInt) -> bool {
        !value.is_negative() && value < &self.0
    }

    #[inline]
    pub fn add(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        self.reduce(&(lhs + rhs))
    }

    #[inline]
    pub fn sub(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        self.reduce(&(lhs - rhs))
    }

    #[inline]
    pub fn mul(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        self.reduce(&(lhs * rhs))
    }

    #[inline]
    pub fn neg(&self, value: &BigInt) -> BigInt {
        self.reduce(&value.negate())
    }

    /// `base^exponent mod m`, right-to-left square-and-multiply.
    ///
    /// A zero exponent yields `1 mod m`. A negative exponent raises the
    /// inverse of `base`, and yields zero when that inverse does not exist.
    pub fn pow(&self, base: &BigInt, exponent: &BigInt) -> BigInt {
        let mut base = if exponent.is_negative() {
            match self.inverse(base) {
                Some(inverse) => inverse,
                None => return BigInt::zero(),
            }
        } else {
            self.reduce(base)
        };
        let mut result = self.reduce(&BigInt::one());
        let top = exponent.bits();
        for i in 0..top {
            if exponent.test_bit(i) {
                result = self.mul(&result, &base);
            }
            if i + 1 < top {
                base = self.mul(&base, &base);
            }
        }
        result
    }

    /// Inverse of `value` in `[1, m)` by the extended Euclidean algorithm,
    /// or `None` when `gcd(value, m) != 1`.
    pub fn inverse(&self, value: &BigInt) -> Option<BigInt> {
        let value = self.reduce(value);
        if value.is_zero() {
            return None;
        }

        let (mut old_r, mut r) = (value, self.0.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
        while !r.is_zero() {
            let (quotient, rem) = old_r.div_rem_nonzero(&r);
            old_r = core::mem::replace(&mut r, rem);
            let next_s = &old_s - &(&quotient * &s);
            old_s = core::mem::replace(&mut s, next_s);
        }

        old_r.is_one().then(|| self.reduce(&old_s))
    }
}

impl TryFrom<BigInt> for Modulus {
    type Error = BigIntError;

    #[inline]
    fn try_from(value: BigInt) -> Result<Self> {
        Modulus::new(value)
    }
}

impl BigInt {
    /// `self^exponent mod modulus` by repeated squaring.
    ///
    /// The receiver must be non-negative, exponent and modulus positive.
    pub fn mod_pow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if self.is_negative() {
            return Err(BigIntError::Domain("mod_pow base must be non-negative"));
        }
        if !exponent.is_positive() {
            return Err(BigIntError::Domain("mod_pow exponent must be positive"));
        }
        if !modulus.is_positive() {
            return Err(BigIntError::Domain("mod_pow modulus must be positive"));
        }
        Ok(Modulus(modulus.clone()).pow(self, exponent))
    }

    /// Modular inverse by the extended Euclidean algorithm.
    ///
    /// Returns the value in `[0, modulus)` whose product with `self` is 1
    /// modulo `modulus`, or zero when no inverse exists.
    pub fn mod_inverse(&self, modulus: &BigInt) -> Result<BigInt> {
        if !modulus.is_positive() {
            return Err(BigIntError::Domain("mod_inverse modulus must be positive"));
        }
        Ok(Modulus(modulus.clone()).inverse(self).unwrap_or_default())
    }

    /// Greatest common divisor, always non-negative.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let (mut a, mut b) = (self.abs(), other.abs());
        while !b.is_zero() {
            let rem = a.reduce(&b);
            a = core::mem::replace(&mut b, rem);
        }
        a
    }

    /// Least common multiple, always non-negative; zero if either is zero.
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let gcd = self.gcd(other);
        (&self.abs() * &other.abs()).div_rem_nonzero(&gcd).0
    }

    /// Floor of the square root, by Newton iteration.
    pub fn isqrt(&self) -> Result<BigInt> {
        if self.is_negative() {
            return Err(BigIntError::Domain("isqrt of a negative value"));
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }

        // 2^ceil(bits/2) is never below the root
        let mut x = BigInt::one() << self.bits().div_ceil(2);
        loop {
            let y = (&x + &self.div_rem_nonzero(&x).0) >> 1;
            if y >= x {
                return Ok(x);
            }
            x = y;
        }
    }
}
