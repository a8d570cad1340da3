// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use wallet_config::{VARINT_TAG_U16, VARINT_TAG_U32, VARINT_TAG_U64};

use crate::{BigInt, BigIntError, Result};

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                let value = value as u128;
                BigInt::from_parts(false, vec![value as u64, (value >> 64) as u64])
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                let magnitude = (value as i128).unsigned_abs();
                BigInt::from_parts(value < 0, vec![magnitude as u64, (magnitude >> 64) as u64])
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigInt> for u64 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self> {
        match value.magnitude.as_slice() {
            _ if value.negative => Err(BigIntError::Domain("value out of range for u64")),
            [] => Ok(0),
            [limb] => Ok(*limb),
            _ => Err(BigIntError::Domain("value out of range for u64")),
        }
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self> {
        let magnitude = match value.magnitude.as_slice() {
            [] => return Ok(0),
            [limb] => *limb,
            _ => return Err(BigIntError::Domain("value out of range for i64")),
        };
        if value.negative {
            0i64.checked_sub_unsigned(magnitude)
                .ok_or(BigIntError::Domain("value out of range for i64"))
        } else {
            i64::try_from(magnitude).map_err(|_| BigIntError::Domain("value out of range for i64"))
        }
    }
}

impl BigInt {
    /// Non-negative value from big-endian magnitude bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> BigInt {
        let limbs = bytes
            .rchunks(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf[8 - chunk.len()..].copy_from_slice(chunk);
                u64::from_be_bytes(buf)
            })
            .collect();
        BigInt::from_parts(false, limbs)
    }

    /// Non-negative value from little-endian magnitude bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> BigInt {
        let limbs = bytes
            .chunks(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(buf)
            })
            .collect();
        BigInt::from_parts(false, limbs)
    }

    /// Minimal little-endian magnitude bytes, ignoring the sign.
    pub(crate) fn magnitude_le_bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .magnitude
            .iter()
            .flat_map(|limb| limb.to_le_bytes())
            .collect();
        while out.len() > 1 && out.last() == Some(&0) {
            out.pop();
        }
        if out.is_empty() {
            out.push(0);
        }
        out
    }

    /// Minimal little-endian bytes; zero is `[0x00]`.
    ///
    /// The decoders read unsigned magnitudes, so negative values are a
    /// `Domain` error rather than an encoding that would not round-trip.
    pub fn to_le_bytes(&self) -> Result<Vec<u8>> {
        if self.is_negative() {
            return Err(BigIntError::Domain("negative values have no byte encoding"));
        }
        Ok(self.magnitude_le_bytes())
    }

    /// Minimal big-endian bytes; zero is `[0x00]`. Negative values are a
    /// `Domain` error.
    pub fn to_be_bytes(&self) -> Result<Vec<u8>> {
        let mut out = self.to_le_bytes()?;
        out.reverse();
        Ok(out)
    }

    /// Big-endian bytes left-padded with zeros to exactly `len` bytes.
    pub fn to_be_bytes_padded(&self, len: usize) -> Result<Vec<u8>> {
        if self.is_negative() {
            return Err(BigIntError::Domain("negative values have no fixed-width encoding"));
        }
        let bytes = if self.is_zero() { Vec::new() } else { self.to_be_bytes()? };
        if bytes.len() > len {
            return Err(BigIntError::Domain("value does not fit the requested width"));
        }
        let mut out = vec![0u8; len - bytes.len()];
        out.extend_from_slice(&bytes);
        Ok(out)
    }

    /// Bitcoin variable-length integer encoding.
    pub fn to_var_bytes(&self) -> Result<Vec<u8>> {
        let value = u64::try_from(self)
            .map_err(|_| BigIntError::Domain("var-int values must fit in an unsigned 64-bit integer"))?;
        let mut out = Vec::with_capacity(9);
        if value < VARINT_TAG_U16 as u64 {
            out.push(value as u8);
        } else if value <= 0xFFFF {
            out.push(VARINT_TAG_U16);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        } else if value <= 0xFFFF_FFFF {
            out.push(VARINT_TAG_U32);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        } else {
            out.push(VARINT_TAG_U64);
            out.extend_from_slice(&value.to_le_bytes());
        }
        Ok(out)
    }

    /// Decodes a complete var-int; the length must match the prefix and the
    /// encoding must be minimal.
    pub fn from_var_bytes(bytes: &[u8]) -> Result<BigInt> {
        let (&tag, body) = bytes
            .split_first()
            .ok_or_else(|| BigIntError::malformed("empty var-int"))?;
        let (width, minimum) = match tag {
            VARINT_TAG_U16 => (2, 0xFDu64),
            VARINT_TAG_U32 => (4, 0x0001_0000),
            VARINT_TAG_U64 => (8, 0x0000_0001_0000_0000),
            value => {
                if !body.is_empty() {
                    return Err(BigIntError::malformed(format!(
                        "single-byte var-int followed by {} extra bytes",
                        body.len()
                    )));
                }
                return Ok(BigInt::from(value));
            }
        };
        if body.len() != width {
            return Err(BigIntError::malformed(format!(
                "var-int tag {tag:#04x} needs {width} bytes, got {}",
                body.len()
            )));
        }
        let value = BigInt::from_le_bytes(body);
        if value < BigInt::from(minimum) {
            return Err(BigIntError::malformed(format!(
                "non-canonical var-int with tag {tag:#04x}"
            )));
        }
        Ok(value)
    }
}
