// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use wallet_bigint::{BigInt, Modulus};

/// Legendre symbol `(a / p)` for an odd prime `p`: 0, 1 or -1.
pub(crate) fn legendre(a: &BigInt, p: &Modulus) -> i8 {
    let a = p.reduce(a);
    if a.is_zero() {
        return 0;
    }
    let half = (p.value() - &BigInt::one()) >> 1;
    if p.pow(&a, &half).is_one() {
        1
    } else {
        -1
    }
}

/// Square root of `a` modulo an odd prime `p` by Tonelli-Shanks.
///
/// Returns one of the two roots, or `None` when `a` is a non-residue.
pub(crate) fn mod_sqrt(a: &BigInt, p: &Modulus) -> Option<BigInt> {
    let a = p.reduce(a);
    match legendre(&a, p) {
        0 => return Some(BigInt::zero()),
        -1 => return None,
        _ => {}
    }

    let one = BigInt::one();
    let p_minus_one = p.value() - &one;
    // p - 1 = q * 2^s with q odd
    let s = p_minus_one.lowest_set_bit()?;
    let q = &p_minus_one >> s;

    if s == 1 {
        let exponent = (p.value() + &one) >> 2;
        return Some(p.pow(&a, &exponent));
    }

    let mut z = BigInt::two();
    while legendre(&z, p) != -1 {
        z = &z + &one;
    }

    let mut m = s;
    let mut c = p.pow(&z, &q);
    let mut t = p.pow(&a, &q);
    let mut r = p.pow(&a, &((&q + &one) >> 1));
    while !t.is_one() {
        // least i in (0, m) with t^(2^i) = 1
        let mut i = 0;
        let mut probe = t.clone();
        while !probe.is_one() {
            probe = p.mul(&probe, &probe);
            i += 1;
            if i == m {
                return None;
            }
        }
        let b = p.pow(&c, &(&one << (m - i - 1)));
        m = i;
        c = p.mul(&b, &b);
        t = p.mul(&t, &c);
        r = p.mul(&r, &b);
    }
    Some(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modulus(p: u64) -> Modulus {
        Modulus::new(BigInt::from(p)).unwrap()
    }

    #[test]
    fn legendre_matches_euler_table() {
        let p = modulus(11);
        let residues = [1u64, 3, 4, 5, 9];
        for a in 0..22u64 {
            let expected = match a % 11 {
                0 => 0,
                r if residues.contains(&r) => 1,
                _ => -1,
            };
            assert_eq!(legendre(&BigInt::from(a), &p), expected, "({a} / 11)");
        }
    }

    #[test]
    fn roots_exhaustive_for_small_primes() {
        // 13, 17, 41, 97 and 113 have p = 1 mod 4 and exercise the full loop
        for prime in [7u64, 11, 13, 17, 23, 41, 97, 113] {
            let p = modulus(prime);
            for a in 0..prime {
                let value = BigInt::from(a);
                let is_square = (0..prime).any(|x| x * x % prime == a);
                match mod_sqrt(&value, &p) {
                    Some(root) => {
                        assert!(is_square, "{a} mod {prime}");
                        assert_eq!(p.mul(&root, &root), value, "{a} mod {prime}");
                    }
                    None => assert!(!is_square, "{a} mod {prime}"),
                }
            }
        }
    }

    #[test]
    fn negative_input_is_reduced_first() {
        let p = modulus(13);
        // -1 = 12 = 5^2 mod 13
        let root = mod_sqrt(&BigInt::from(-1), &p).unwrap();
        assert_eq!(p.mul(&root, &root), BigInt::from(12));
    }
}
