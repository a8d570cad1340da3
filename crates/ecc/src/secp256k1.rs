// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use hex_literal::hex;
use once_cell::sync::Lazy;
use wallet_bigint::{BigInt, Modulus};

use crate::Curve;

const P: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");
const N: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
const GX: [u8; 32] = hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
const GY: [u8; 32] = hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

static SECP256K1: Lazy<Curve> = Lazy::new(|| {
    let modulus = |bytes: &[u8]| {
        Modulus::new(BigInt::from_be_bytes(bytes)).expect("secp256k1 moduli are positive")
    };
    Curve::from_trusted_parts(
        BigInt::zero(),
        BigInt::from(7u8),
        modulus(&P),
        modulus(&N),
        BigInt::from_be_bytes(&GX),
        BigInt::from_be_bytes(&GY),
    )
});

/// The process-wide secp256k1 curve, `y^2 = x^3 + 7`.
///
/// Built on first use from the fixed domain parameters; they are not
/// re-validated.
pub fn secp256k1() -> &'static Curve {
    &SECP256K1
}
