// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use wallet_bigint::BigIntError;

/// Errors raised by curve construction, point handling and ECDSA.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EccError {
    #[error("ecc: curve validation failed: {0}")]
    CurveValidation(&'static str),

    #[error("ecc: signature input out of range: {0}")]
    SignatureRange(&'static str),

    #[error("ecc: curve has no base point or subgroup order")]
    NoGenerator,

    #[error("ecc: points belong to different curves")]
    CurveMismatch,

    #[error("ecc: malformed encoding: {0}")]
    Malformed(&'static str),

    #[error(transparent)]
    BigInt(#[from] BigIntError),
}

pub type Result<T> = core::result::Result<T, EccError>;
