// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! # Wallet ECC
//!
//! Short-Weierstrass elliptic curves `y^2 = x^3 + a*x + b` over prime
//! fields, with affine point arithmetic, SEC1 point encoding and ECDSA.
//!
//! The [`secp256k1`] curve is available as a process-wide singleton. Other
//! curves are validated when constructed.
//!
//! ## Example
//!
//! ```rust
//! use wallet_ecc::secp256k1;
//!
//! let curve = secp256k1();
//! let private_key = curve.generate_private_key().unwrap();
//! let public_key = curve.public_key(&private_key).unwrap();
//!
//! let digest = [0x5au8; 32];
//! let signature = curve.sign(&digest, &private_key).unwrap();
//! assert!(curve.verify(&digest, &public_key, &signature).unwrap());
//! ```

mod curve;
mod ecdsa;
mod encoding;
mod error;
mod point;
mod secp256k1;
mod sqrt;

pub use curve::Curve;
pub use ecdsa::Signature;
pub use error::{EccError, Result};
pub use point::Point;
pub use self::secp256k1::secp256k1;
