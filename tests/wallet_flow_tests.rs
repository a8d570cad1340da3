//! End-to-end wallet flows through the facade crate
//!
//! Curve parameters come from configuration, keys and signatures travel
//! through their byte and JSON encodings, and logging is routed to the test
//! harness.

use hex_literal::hex;
use rand::{rngs::StdRng, SeedableRng};
use wallet_crypto::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

const SECP256K1_TOML: &str = r#"
name = "Secp256k1"
a = "0x00"
b = "0x07"
p = "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"

[group]
n = "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
gx = "0x79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
gy = "0x483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
"#;

#[test]
fn configured_curve_matches_singleton() {
    init_tracing();
    let config: CurveConfig = toml::from_str(SECP256K1_TOML).unwrap();
    assert_eq!(config.name, NamedCurve::Secp256k1);
    let curve = Curve::from_config(&config).unwrap();
    assert_eq!(&curve, secp256k1());
}

#[test]
fn sign_transport_and_verify() {
    init_tracing();
    let curve = secp256k1();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let private_key = curve.generate_private_key_with(&mut rng).unwrap();
    let public_key = curve.public_key(&private_key).unwrap();
    let digest = hex!("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08");

    let signature = curve.sign_with(&mut rng, &digest, &private_key).unwrap();
    let json = serde_json::to_string(&signature).unwrap();
    let received: Signature = serde_json::from_str(&json).unwrap();
    assert_eq!(received, signature);

    let key_bytes = public_key.to_compressed();
    let received_key = curve.decode_point(&key_bytes).unwrap();
    assert!(curve.verify(&digest, &received_key, &received).unwrap());

    let mut tampered = digest;
    tampered[31] ^= 1;
    assert!(!curve.verify(&tampered, &received_key, &received).unwrap());
}

#[test]
fn private_key_serialization() {
    let curve = secp256k1();
    let private_key = curve.generate_private_key().unwrap();
    let bytes = private_key.to_be_bytes_padded(32).unwrap();
    assert_eq!(BigInt::from_be_bytes(&bytes), private_key);

    let text = serde_json::to_string(&private_key).unwrap();
    assert!(text.starts_with("\"0x"));
    assert_eq!(serde_json::from_str::<BigInt>(&text).unwrap(), private_key);
}

#[test]
fn invalid_curve_configuration_is_reported() {
    init_tracing();
    let mut config = CurveConfig::secp256k1();
    // a composite field modulus
    config.p = "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2D".into();
    config.group = None;
    assert!(matches!(Curve::from_config(&config), Err(EccError::CurveValidation(_))));
}

#[test]
fn var_int_lengths_for_script_sizes() {
    for (len, encoded_len) in [(0x10u64, 1), (0x1000, 3), (0x10_0000, 5), (0x1_0000_0000, 9)] {
        let encoded = BigInt::from(len).to_var_bytes().unwrap();
        assert_eq!(encoded.len(), encoded_len);
        assert_eq!(BigInt::from_var_bytes(&encoded).unwrap(), BigInt::from(len));
    }
}

#[test]
fn version_is_set() {
    assert!(!wallet_crypto::VERSION.is_empty());
}
