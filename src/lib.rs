//! # Wallet Crypto: big integers and secp256k1 ECDSA in Rust
//!
//! The numeric core of a Bitcoin-style wallet:
//! - Immutable arbitrary-precision signed integers with modular arithmetic,
//!   primality testing, random generation and byte/string codecs
//! - Short-Weierstrass curves over prime fields with SEC1 point encoding
//! - ECDSA signing and verification with low-s normalization on secp256k1
//!
//! ## Quick Start
//!
//! ```rust
//! use wallet_crypto::prelude::*;
//!
//! let curve = secp256k1();
//! let private_key = curve.generate_private_key().unwrap();
//! let public_key = curve.public_key(&private_key).unwrap();
//!
//! let digest = [0x11u8; 32];
//! let signature = curve.sign(&digest, &private_key).unwrap();
//! let compact = signature.to_compact(curve.scalar_size().unwrap()).unwrap();
//!
//! let decoded = Signature::from_compact(&compact).unwrap();
//! let key = curve.decode_point(&public_key.to_compressed()).unwrap();
//! assert!(curve.verify(&digest, &key, &decoded).unwrap());
//! ```
//!
//! ## Architecture
//!
//! - [`wallet_config`] - Protocol constants and curve parameter sets
//! - [`wallet_bigint`] - Arbitrary-precision integer arithmetic
//! - [`wallet_ecc`] - Curves, points and ECDSA

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use wallet_bigint as bigint;
pub use wallet_config as config;
pub use wallet_ecc as ecc;

/// Common imports for wallet code
pub mod prelude {
    pub use crate::bigint::{BigInt, BigIntError, Modulus};
    pub use crate::config::{CurveConfig, GroupConfig, NamedCurve};
    pub use crate::ecc::{secp256k1, Curve, EccError, Point, Signature};
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
