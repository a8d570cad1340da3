//! Property-based group-law tests on secp256k1
//!
//! Scalar multiplication is slow with schoolbook arithmetic, so each
//! property runs a handful of cases.

use proptest::prelude::*;
use wallet_bigint::BigInt;
use wallet_ecc::{secp256k1, Point};

fn scalar() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u8>(), 1..=32).prop_map(|bytes| BigInt::from_be_bytes(&bytes))
}

fn point(k: &BigInt) -> Point<'static> {
    secp256k1().generator().unwrap().multiply(k)
}

mod group_law_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(6))]

        #[test]
        fn prop_scalar_multiplication_distributes(a in scalar(), b in scalar()) {
            let g = secp256k1().generator().unwrap();
            let sum = &a + &b;
            prop_assert_eq!(g.multiply(&sum), &g.multiply(&a) + &g.multiply(&b));
        }

        #[test]
        fn prop_addition_commutes_and_associates(a in scalar(), b in scalar(), c in scalar()) {
            let (p, q, r) = (point(&a), point(&b), point(&c));
            prop_assert_eq!(&p + &q, &q + &p);
            prop_assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
        }

        #[test]
        fn prop_identity_and_inverse(a in scalar()) {
            let p = point(&a);
            let infinity = secp256k1().infinity();
            prop_assert_eq!(&p + &infinity, p.clone());
            prop_assert_eq!(&infinity + &p, p.clone());
            prop_assert!((&p - &p).is_infinity());
            let g = secp256k1().generator().unwrap();
            prop_assert_eq!(g.multiply(&a.negate()), -&p);
        }

        #[test]
        fn prop_scalar_multiplication_composes(a in scalar(), b in scalar()) {
            let g = secp256k1().generator().unwrap();
            let n = secp256k1().order().unwrap();
            let ab = (&a * &b).modulo(n).unwrap();
            prop_assert_eq!(g.multiply(&a).multiply(&b), g.multiply(&ab));
        }

        #[test]
        fn prop_order_annihilates_every_point(a in scalar()) {
            let p = point(&a);
            prop_assert!(p.multiply(secp256k1().order().unwrap()).is_infinity());
        }

        #[test]
        fn prop_encodings_round_trip(a in scalar()) {
            let curve = secp256k1();
            let p = point(&a);
            prop_assert_eq!(curve.decode_point(&p.to_compressed()).unwrap(), p.clone());
            prop_assert_eq!(curve.decode_point(&p.to_uncompressed()).unwrap(), p);
        }
    }
}
