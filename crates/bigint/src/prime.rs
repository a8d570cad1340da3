// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use rand::{rngs::OsRng, CryptoRng, RngCore};
use wallet_config::{PRIMALITY_ROUNDS, SMALL_PRIME_LIMIT};

use crate::BigInt;

/// Primes below `SMALL_PRIME_LIMIT`.
const SMALL_PRIMES: [u64; 11] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

impl BigInt {
    /// Probabilistic primality test using the operating system's CSPRNG.
    pub fn is_probable_prime(&self) -> bool {
        self.is_probable_prime_with(&mut OsRng)
    }

    /// Miller–Rabin with `PRIMALITY_ROUNDS` random witnesses drawn from
    /// `[3, 2^(bits-1))`. Values below `SMALL_PRIME_LIMIT` come from a table.
    pub fn is_probable_prime_with<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> bool {
        if self.is_negative() {
            return false;
        }
        if let Ok(small) = u64::try_from(self) {
            if small < SMALL_PRIME_LIMIT {
                return SMALL_PRIMES.contains(&small);
            }
        }
        if self.is_even() {
            return false;
        }

        let n_minus_one = self - &BigInt::one();
        let Some(s) = n_minus_one.lowest_set_bit() else {
            return false;
        };
        let d = &n_minus_one >> s;

        let low = BigInt::from(3);
        // bits() >= 6 here, so the witness range is never empty
        let span = (BigInt::one() << (self.bits() - 1)) - &low;

        'witness: for _ in 0..PRIMALITY_ROUNDS {
            let Ok(offset) = BigInt::random_below_with(rng, &span) else {
                return false;
            };
            let witness = &offset + &low;
            let Ok(mut x) = witness.mod_pow(&d, self) else {
                return false;
            };
            if x.is_one() || x == n_minus_one {
                continue;
            }
            for _ in 1..s {
                x = (&x * &x).reduce(self);
                if x == n_minus_one {
                    continue 'witness;
                }
            }
            return false;
        }
        true
    }
}
