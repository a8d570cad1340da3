// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! SEC1 point encoding.
//!
//! Infinity is the single byte `0x00`. Affine points are `0x04 || x || y`
//! uncompressed or `0x02`/`0x03 || x` compressed, where the tag carries the
//! parity of `y`. Coordinates are big-endian and padded to the curve's
//! coordinate size.

use wallet_bigint::BigInt;
use wallet_config::{SEC1_TAG_EVEN, SEC1_TAG_INFINITY, SEC1_TAG_ODD, SEC1_TAG_UNCOMPRESSED};

use crate::{Curve, EccError, Point, Result};

/// Big-endian bytes of a value known to fit `width`, left-padded with zeros.
pub(crate) fn fixed_width(value: &BigInt, width: usize) -> Vec<u8> {
    // coordinates and scalars are never negative
    let bytes = value.to_be_bytes().unwrap_or_default();
    let mut out = vec![0u8; width.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}

impl Point<'_> {
    pub fn to_uncompressed(&self) -> Vec<u8> {
        let (Some(x), Some(y)) = (self.x(), self.y()) else {
            return vec![SEC1_TAG_INFINITY];
        };
        let width = self.curve().coordinate_size();
        let mut out = Vec::with_capacity(1 + 2 * width);
        out.push(SEC1_TAG_UNCOMPRESSED);
        out.extend(fixed_width(x, width));
        out.extend(fixed_width(y, width));
        out
    }

    pub fn to_compressed(&self) -> Vec<u8> {
        let (Some(x), Some(y)) = (self.x(), self.y()) else {
            return vec![SEC1_TAG_INFINITY];
        };
        let width = self.curve().coordinate_size();
        let mut out = Vec::with_capacity(1 + width);
        out.push(if y.is_even() { SEC1_TAG_EVEN } else { SEC1_TAG_ODD });
        out.extend(fixed_width(x, width));
        out
    }
}

impl Curve {
    /// Decodes a SEC1 point and checks that it lies on this curve.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point<'_>> {
        let width = self.coordinate_size();
        let Some((&tag, body)) = bytes.split_first() else {
            return Err(EccError::Malformed("empty point encoding"));
        };
        match tag {
            SEC1_TAG_INFINITY if body.is_empty() => Ok(self.infinity()),
            SEC1_TAG_UNCOMPRESSED if body.len() == 2 * width => {
                let (x, y) = body.split_at(width);
                self.point(BigInt::from_be_bytes(x), BigInt::from_be_bytes(y))
            }
            SEC1_TAG_EVEN | SEC1_TAG_ODD if body.len() == width => {
                self.point_from_x(BigInt::from_be_bytes(body), tag == SEC1_TAG_EVEN)
            }
            SEC1_TAG_INFINITY | SEC1_TAG_UNCOMPRESSED | SEC1_TAG_EVEN | SEC1_TAG_ODD => {
                Err(EccError::Malformed("point encoding has the wrong length"))
            }
            _ => Err(EccError::Malformed("unknown point encoding tag")),
        }
    }
}
