//! Wallet Configuration Module
//!
//! Constants shared by the arithmetic and curve crates, and serde-loadable
//! curve parameter sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of random witnesses drawn by the probabilistic primality test
pub const PRIMALITY_ROUNDS: usize = 40;
/// Values below this bound are classified from an exact prime table
pub const SMALL_PRIME_LIMIT: u64 = 32;

/// Size of a secp256k1 field coordinate or scalar in bytes
pub const SECP256K1_COORDINATE_SIZE: usize = 32;
/// Size of a SEC1 compressed secp256k1 point
pub const COMPRESSED_POINT_SIZE: usize = 1 + SECP256K1_COORDINATE_SIZE;
/// Size of a SEC1 uncompressed secp256k1 point
pub const UNCOMPRESSED_POINT_SIZE: usize = 1 + 2 * SECP256K1_COORDINATE_SIZE;
/// Size of a compact `r || s` secp256k1 signature
pub const COMPACT_SIGNATURE_SIZE: usize = 2 * SECP256K1_COORDINATE_SIZE;

/// SEC1 tag of the encoded point at infinity
pub const SEC1_TAG_INFINITY: u8 = 0x00;
/// SEC1 tag of a compressed point with even y
pub const SEC1_TAG_EVEN: u8 = 0x02;
/// SEC1 tag of a compressed point with odd y
pub const SEC1_TAG_ODD: u8 = 0x03;
/// SEC1 tag of an uncompressed point
pub const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;

/// Var-int prefix announcing a 2-byte little-endian value
pub const VARINT_TAG_U16: u8 = 0xFD;
/// Var-int prefix announcing a 4-byte little-endian value
pub const VARINT_TAG_U32: u8 = 0xFE;
/// Var-int prefix announcing an 8-byte little-endian value
pub const VARINT_TAG_U64: u8 = 0xFF;

/// secp256k1 domain parameters, big-endian hex
pub mod secp256k1 {
    pub const P: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
    pub const A: &str = "00";
    pub const B: &str = "07";
    pub const N: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
    pub const GX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
    pub const GY: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";
}

/// Curves known by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NamedCurve {
    #[default]
    Secp256k1,
    Custom,
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedCurve::Secp256k1 => write!(f, "secp256k1"),
            NamedCurve::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for NamedCurve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "secp256k1" | "k1" | "bitcoin" => Ok(NamedCurve::Secp256k1),
            "custom" => Ok(NamedCurve::Custom),
            _ => Err(format!("Unknown curve: {}", s)),
        }
    }
}

/// Base point and subgroup order of a curve, big-endian hex strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub n: String,
    pub gx: String,
    pub gy: String,
}

/// Short-Weierstrass curve parameters `y^2 = x^3 + ax + b (mod p)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    #[serde(default)]
    pub name: NamedCurve,
    pub a: String,
    pub b: String,
    pub p: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupConfig>,
}

impl CurveConfig {
    /// The standard secp256k1 parameter set.
    pub fn secp256k1() -> Self {
        Self {
            name: NamedCurve::Secp256k1,
            a: secp256k1::A.to_string(),
            b: secp256k1::B.to_string(),
            p: secp256k1::P.to_string(),
            group: Some(GroupConfig {
                n: secp256k1::N.to_string(),
                gx: secp256k1::GX.to_string(),
                gy: secp256k1::GY.to_string(),
            }),
        }
    }

    /// Whether group-order operations (signing) are available.
    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::secp256k1()
    }
}
