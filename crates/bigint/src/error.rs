// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

/// Errors returned by `BigInt` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error("bigint: malformed value: {0}")]
    MalformedValue(String),

    #[error("bigint: division by zero")]
    DivisionByZero,

    #[error("bigint: {0}")]
    Domain(&'static str),
}

impl BigIntError {
    #[inline]
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedValue(reason.into())
    }
}

pub type Result<T> = core::result::Result<T, BigIntError>;
