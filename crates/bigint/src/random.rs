// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{limb, BigInt, BigIntError, Result};

fn random_limbs<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, bits: usize) -> Vec<u64> {
    let mut limbs = vec![0u64; bits.div_ceil(limb::LIMB_BITS)];
    for value in limbs.iter_mut() {
        *value = rng.next_u64();
    }
    let excess = limbs.len() * limb::LIMB_BITS - bits;
    if let Some(top) = limbs.last_mut() {
        *top &= u64::MAX >> excess;
    }
    limbs
}

impl BigInt {
    /// Random positive value with `min_bits <= bits() <= max_bits`, drawn
    /// from the operating system's CSPRNG.
    pub fn random(min_bits: usize, max_bits: usize) -> Result<BigInt> {
        Self::random_with(&mut OsRng, min_bits, max_bits)
    }

    pub fn random_with<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        min_bits: usize,
        max_bits: usize,
    ) -> Result<BigInt> {
        if min_bits < 2 {
            return Err(BigIntError::Domain("random bit length must be at least 2"));
        }
        if max_bits < min_bits {
            return Err(BigIntError::Domain("random maximum bit length is below the minimum"));
        }

        let mut limbs = random_limbs(rng, max_bits);
        if min_bits == max_bits {
            limb::set_bit(&mut limbs, max_bits - 1);
        } else if limb::bits(&limbs) < min_bits {
            // nothing set in [min_bits - 1, max_bits)
            limb::set_bit(&mut limbs, min_bits - 1);
        }
        Ok(BigInt::from_parts(false, limbs))
    }

    /// Uniform value in `[0, bound)` by rejection sampling.
    pub fn random_below(bound: &BigInt) -> Result<BigInt> {
        Self::random_below_with(&mut OsRng, bound)
    }

    pub fn random_below_with<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        bound: &BigInt,
    ) -> Result<BigInt> {
        if !bound.is_positive() {
            return Err(BigIntError::Domain("random bound must be positive"));
        }
        let bits = bound.bits();
        loop {
            let candidate = BigInt::from_parts(false, random_limbs(rng, bits));
            if &candidate < bound {
                return Ok(candidate);
            }
        }
    }

    /// Random probable prime with `min_bits <= bits() <= max_bits`.
    pub fn random_prime(min_bits: usize, max_bits: usize) -> Result<BigInt> {
        Self::random_prime_with(&mut OsRng, min_bits, max_bits)
    }

    pub fn random_prime_with<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        min_bits: usize,
        max_bits: usize,
    ) -> Result<BigInt> {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let candidate = Self::random_with(rng, min_bits, max_bits)?;
            if candidate.is_probable_prime_with(rng) {
                tracing::trace!(attempts, bits = candidate.bits(), "random prime found");
                return Ok(candidate);
            }
        }
    }
}
