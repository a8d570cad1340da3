// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use wallet_bigint::{BigInt, Modulus};

use crate::encoding::fixed_width;
use crate::{Curve, EccError, Point, Result};

/// An ECDSA signature `(r, s)`.
///
/// Signatures produced by [`Curve::sign`] always carry `s <= n/2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Wraps raw components; ranges are checked when verifying.
    #[inline]
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }

    #[inline]
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Whether `s` is at most half the group order of `curve`.
    pub fn is_low_s(&self, curve: &Curve) -> Result<bool> {
        let n = &curve.group()?.n;
        Ok(self.s <= (n.value() >> 1))
    }

    /// `r || s`, each big-endian and padded to `width` bytes.
    pub fn to_compact(&self, width: usize) -> Result<Vec<u8>> {
        let fits = |v: &BigInt| !v.is_negative() && v.bits() <= width * 8;
        if !fits(&self.r) || !fits(&self.s) {
            return Err(EccError::Malformed("signature component does not fit the compact width"));
        }
        let mut out = fixed_width(&self.r, width);
        out.extend(fixed_width(&self.s, width));
        Ok(out)
    }

    /// Splits `r || s` into two equal big-endian halves.
    pub fn from_compact(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return Err(EccError::Malformed("compact signature must have two equal halves"));
        }
        let (r, s) = bytes.split_at(bytes.len() / 2);
        Ok(Self::new(BigInt::from_be_bytes(r), BigInt::from_be_bytes(s)))
    }
}

/// `v` in `[1, n)`.
fn is_scalar(v: &BigInt, n: &Modulus) -> bool {
    v.is_positive() && n.contains(v)
}

impl Curve {
    /// Message digest as an integer, which may not be longer than `n`.
    fn message_scalar(&self, n: &Modulus, message: &[u8]) -> Result<BigInt> {
        let z = BigInt::from_be_bytes(message);
        if z.bits() > n.bits() {
            return Err(EccError::SignatureRange("message is longer than the group order"));
        }
        Ok(z)
    }

    /// Signs a message digest with a fresh random nonce from the OS CSPRNG.
    pub fn sign(&self, message: &[u8], private_key: &BigInt) -> Result<Signature> {
        self.sign_with(&mut OsRng, message, private_key)
    }

    /// Signs a message digest, drawing nonces from `rng`.
    ///
    /// The nonce has between `bits(n)/2` and `bits(n)` bits and lies in
    /// `[1, n)`; draws that give `r = 0` or `s = 0` are retried. The result
    /// is normalized to low-s form.
    pub fn sign_with<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        message: &[u8],
        private_key: &BigInt,
    ) -> Result<Signature> {
        let group = self.group()?;
        let n = &group.n;
        if !is_scalar(private_key, n) {
            return Err(EccError::SignatureRange("private key must lie in [1, n)"));
        }
        let z = self.message_scalar(n, message)?;
        let generator = self.generator()?;
        let max_bits = n.bits();
        let min_bits = (max_bits / 2).max(2);
        let half_order = n.value() >> 1;

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let k = BigInt::random_with(rng, min_bits, max_bits)?;
            if !n.contains(&k) {
                continue;
            }
            let Some(x) = generator.multiply(&k).x().cloned() else {
                continue;
            };
            let r = n.reduce(&x);
            if r.is_zero() {
                trace!(attempts, "nonce gave r = 0, retrying");
                continue;
            }
            let Some(k_inverse) = n.inverse(&k) else {
                continue;
            };
            let s = n.mul(&k_inverse, &n.add(&z, &n.mul(&r, private_key)));
            if s.is_zero() {
                trace!(attempts, "nonce gave s = 0, retrying");
                continue;
            }
            let s = if s > half_order { n.value() - &s } else { s };
            return Ok(Signature { r, s });
        }
    }

    /// Checks a signature against a public key on this curve.
    ///
    /// Components outside `[1, n)` are an error, as is a key from another
    /// curve. Both low-s and high-s forms are accepted.
    pub fn verify<'c>(
        &'c self,
        message: &[u8],
        public_key: &Point<'c>,
        signature: &Signature,
    ) -> Result<bool> {
        let group = self.group()?;
        let n = &group.n;
        if !is_scalar(&signature.r, n) || !is_scalar(&signature.s, n) {
            debug!("signature components outside [1, n)");
            return Err(EccError::SignatureRange("r and s must lie in [1, n)"));
        }
        if !public_key.is_on(self) {
            return Err(EccError::CurveMismatch);
        }
        let z = self.message_scalar(n, message)?;
        if public_key.is_infinity() {
            debug!("public key is the point at infinity");
            return Ok(false);
        }

        let Some(w) = n.inverse(&signature.s) else {
            return Ok(false);
        };
        let u1 = n.mul(&z, &w);
        let u2 = n.mul(&signature.r, &w);
        let point = self
            .generator()?
            .multiply(&u1)
            .add_unchecked(&public_key.multiply(&u2));
        Ok(point.x().is_some_and(|x| n.reduce(x) == signature.r))
    }

    /// A uniformly random private key in `[1, n)`.
    pub fn generate_private_key(&self) -> Result<BigInt> {
        self.generate_private_key_with(&mut OsRng)
    }

    pub fn generate_private_key_with<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<BigInt> {
        let n = &self.group()?.n;
        loop {
            let key = BigInt::random_below_with(rng, n.value())?;
            if !key.is_zero() {
                return Ok(key);
            }
        }
    }

    /// `d*G` for a private key `d` in `[1, n)`.
    pub fn public_key(&self, private_key: &BigInt) -> Result<Point<'_>> {
        let n = &self.group()?.n;
        if !is_scalar(private_key, n) {
            return Err(EccError::SignatureRange("private key must lie in [1, n)"));
        }
        Ok(self.generator()?.multiply(private_key))
    }
}
