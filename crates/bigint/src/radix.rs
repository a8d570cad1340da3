// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, UpperHex};
use core::str::FromStr;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::{limb, BigInt, BigIntError, Result};

/// Largest power of ten that fits a limb, and its exponent.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

fn parse_magnitude(digits: &str, radix: u32) -> Result<Vec<u64>> {
    if digits.is_empty() {
        return Err(BigIntError::malformed("no digits"));
    }
    match radix {
        2 => {
            let mut limbs = Vec::with_capacity(digits.len().div_ceil(limb::LIMB_BITS));
            for (index, ch) in digits.bytes().rev().enumerate() {
                match ch {
                    b'0' => {}
                    b'1' => limb::set_bit(&mut limbs, index),
                    other => {
                        return Err(BigIntError::malformed(format!(
                            "invalid binary digit {:?}",
                            other as char
                        )))
                    }
                }
            }
            Ok(limbs)
        }
        10 => {
            if let Some(bad) = digits.chars().find(|ch| !ch.is_ascii_digit()) {
                return Err(BigIntError::malformed(format!("invalid decimal digit {bad:?}")));
            }
            let mut acc = BigInt::zero();
            for chunk in digits.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
                let value = chunk
                    .iter()
                    .fold(0u64, |acc, digit| acc * 10 + (digit - b'0') as u64);
                let scale = 10u64.pow(chunk.len() as u32);
                acc = &acc * &BigInt::from(scale) + BigInt::from(value);
            }
            Ok(acc.magnitude)
        }
        16 => {
            let padded;
            let even = if digits.len() % 2 == 1 {
                padded = format!("0{digits}");
                padded.as_str()
            } else {
                digits
            };
            let bytes = hex::decode(even).map_err(|err| BigIntError::malformed(err.to_string()))?;
            Ok(BigInt::from_be_bytes(&bytes).magnitude)
        }
        other => Err(BigIntError::malformed(format!("unsupported radix {other}"))),
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

impl BigInt {
    /// Parses digits in radix 2, 10 or 16, with an optional leading `-`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        let (negative, digits) = split_sign(s);
        Ok(BigInt::from_parts(negative, parse_magnitude(digits, radix)?))
    }

    /// Formats the value in radix 2, 10 or 16 (lowercase, no prefix).
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        let digits = match radix {
            2 => self.magnitude_binary(),
            10 => self.magnitude_decimal(),
            16 => self.magnitude_hex(),
            other => return Err(BigIntError::malformed(format!("unsupported radix {other}"))),
        };
        Ok(if self.negative { format!("-{digits}") } else { digits })
    }

    fn magnitude_binary(&self) -> String {
        match self.magnitude.split_last() {
            None => "0".to_string(),
            Some((top, rest)) => rest
                .iter()
                .rev()
                .fold(format!("{top:b}"), |mut out, limb| {
                    out.push_str(&format!("{limb:064b}"));
                    out
                }),
        }
    }

    fn magnitude_hex(&self) -> String {
        let mut bytes = self.magnitude_le_bytes();
        bytes.reverse();
        let encoded = hex::encode(bytes);
        match encoded.strip_prefix('0') {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => encoded,
        }
    }

    fn magnitude_decimal(&self) -> String {
        let mut chunks = Vec::new();
        let mut rest = self.magnitude.clone();
        while !rest.is_empty() {
            let (quotient, chunk) = limb::div_rem_small(&rest, DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }
        match chunks.split_last() {
            None => "0".to_string(),
            Some((top, lower)) => lower.iter().rev().fold(top.to_string(), |mut out, chunk| {
                out.push_str(&format!("{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS));
                out
            }),
        }
    }
}

/// Accepts an optional `-`, then `0x`/`0b` prefixed hex/binary digits.
/// Unprefixed input is binary when it only holds `0` and `1`, hex otherwise.
impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, body) = split_sign(s.trim());
        let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
            parse_magnitude(hex, 16)?
        } else if let Some(bin) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
            parse_magnitude(bin, 2)?
        } else if !body.is_empty() && body.bytes().all(|ch| ch == b'0' || ch == b'1') {
            parse_magnitude(body, 2)?
        } else {
            parse_magnitude(body, 16)?
        };
        Ok(BigInt::from_parts(negative, magnitude))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    #[inline]
    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_decimal())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude_hex())
    }
}

impl UpperHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude_hex().to_uppercase())
    }
}

impl Binary for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0b", &self.magnitude_binary())
    }
}

impl Serialize for BigInt {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{self:#x}"))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        BigInt::from_str(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_auto_detects_radix() {
        assert_eq!("FF".parse::<BigInt>().unwrap(), BigInt::from(255));
        assert_eq!("0xff".parse::<BigInt>().unwrap(), BigInt::from(255));
        assert_eq!("0b101".parse::<BigInt>().unwrap(), BigInt::from(5));
        // only 0/1 without prefix reads as binary
        assert_eq!("101".parse::<BigInt>().unwrap(), BigInt::from(5));
        assert_eq!("102".parse::<BigInt>().unwrap(), BigInt::from(0x102));
        assert_eq!("-0x10".parse::<BigInt>().unwrap(), BigInt::from(-16));
        assert_eq!("abc".parse::<BigInt>().unwrap(), BigInt::from(0xabc));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "-", "0x", "0b", "0b102", "xyz", "12 34", "0x1g"] {
            assert!(
                matches!(bad.parse::<BigInt>(), Err(BigIntError::MalformedValue(_))),
                "{bad:?}"
            );
        }
        assert!(BigInt::from_str_radix("12a", 10).is_err());
        assert!(BigInt::from_str_radix("12", 8).is_err());
    }

    #[test]
    fn decimal_round_trip_across_chunks() {
        let text = "115792089237316195423570985008687907852837564279074904382605163141518161494337";
        let v = BigInt::from_str_radix(text, 10).unwrap();
        assert_eq!(v.to_string(), text);
        assert_eq!(
            format!("{v:X}"),
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
        );
        assert_eq!(BigInt::from_str_radix("-000123", 10).unwrap(), BigInt::from(-123));
        assert_eq!(BigInt::from(10).pow(19).to_string(), "10000000000000000000");
    }

    #[test]
    fn formatting() {
        let v = BigInt::from(-255);
        assert_eq!(v.to_string(), "-255");
        assert_eq!(format!("{v:x}"), "-ff");
        assert_eq!(format!("{v:#x}"), "-0xff");
        assert_eq!(format!("{:#b}", BigInt::from(5)), "0b101");
        assert_eq!(format!("{:>6}", BigInt::from(42)), "    42");
        assert_eq!(format!("{:x}", BigInt::zero()), "0");
        assert_eq!(BigInt::from(0x1ff).to_str_radix(16).unwrap(), "1ff");
        assert_eq!(BigInt::from(-6).to_str_radix(2).unwrap(), "-110");
        assert_eq!((BigInt::one() << 64).to_str_radix(2).unwrap().len(), 65);
    }

    #[test]
    fn serde_uses_prefixed_hex() {
        let v = BigInt::from(-4096);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"-0x1000\"");
        assert_eq!(serde_json::from_str::<BigInt>(&json).unwrap(), v);
        assert!(serde_json::from_str::<BigInt>("\"0xzz\"").is_err());
    }
}
