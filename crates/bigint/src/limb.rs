// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Magnitude arithmetic on little-endian `u64` limb slices.
//!
//! Inputs are expected to be normalized (no high zero limbs) unless a
//! function says otherwise; outputs are always normalized.

use core::cmp::Ordering;

pub(crate) const LIMB_BITS: usize = 64;

pub(crate) trait Widening: Sized {
    const BITS: u8;

    type DoubleWidth;

    fn add_with_carrying(self, rhs: Self, carry: bool) -> (Self, bool);

    fn sub_with_borrowing(self, rhs: Self, borrow: bool) -> (Self, bool);

    fn mul_with_carrying(self, rhs: Self, carry: Self) -> (Self, Self);
}

impl Widening for u64 {
    const BITS: u8 = 64;

    type DoubleWidth = u128;

    #[inline]
    fn add_with_carrying(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (r1, o1) = self.overflowing_add(rhs);
        if carry {
            let (r2, o2) = r1.overflowing_add(1);
            (r2, o1 || o2)
        } else {
            (r1, o1)
        }
    }

    #[inline]
    fn sub_with_borrowing(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (r1, o1) = self.overflowing_sub(rhs);
        if borrow {
            let (r2, o2) = r1.overflowing_sub(1);
            (r2, o1 || o2)
        } else {
            (r1, o1)
        }
    }

    #[inline]
    fn mul_with_carrying(self, rhs: Self, carry: Self) -> (Self, Self) {
        let r = carry as Self::DoubleWidth + self as Self::DoubleWidth * rhs as Self::DoubleWidth;
        (r as Self, (r >> Self::BITS) as Self)
    }
}

#[inline]
pub(crate) fn normalize(mut limbs: Vec<u64>) -> Vec<u64> {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
    limbs
}

#[inline]
fn trim(limbs: &[u64]) -> &[u64] {
    let mut len = limbs.len();
    while len > 0 && limbs[len - 1] == 0 {
        len -= 1;
    }
    &limbs[..len]
}

/// Compares two magnitudes; tolerates high zero limbs.
pub(crate) fn cmp(a: &[u64], b: &[u64]) -> Ordering {
    let (a, b) = (trim(a), trim(b));
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

#[inline]
pub(crate) fn bits(limbs: &[u64]) -> usize {
    match trim(limbs).split_last() {
        None => 0,
        Some((top, rest)) => rest.len() * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize),
    }
}

#[inline]
pub(crate) fn test_bit(limbs: &[u64], index: usize) -> bool {
    limbs
        .get(index / LIMB_BITS)
        .map_or(false, |limb| (limb >> (index % LIMB_BITS)) & 1 == 1)
}

/// Sets a bit, growing the buffer when needed.
pub(crate) fn set_bit(limbs: &mut Vec<u64>, index: usize) {
    let at = index / LIMB_BITS;
    if limbs.len() <= at {
        limbs.resize(at + 1, 0);
    }
    limbs[at] |= 1 << (index % LIMB_BITS);
}

/// Ripple-carry addition.
pub(crate) fn add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = false;
    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let (sum, c) = x.add_with_carrying(y, carry);
        out.push(sum);
        carry = c;
    }
    if carry {
        out.push(1);
    }
    normalize(out)
}

/// Ripple-borrow subtraction `a - b`; requires `a >= b`.
pub(crate) fn sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = a.to_vec();
    sub_assign(&mut out, b);
    normalize(out)
}

/// In-place `a -= b`; requires `a >= b` and `b` normalized.
pub(crate) fn sub_assign(a: &mut [u64], b: &[u64]) {
    let mut borrow = false;
    for (i, limb) in a.iter_mut().enumerate() {
        if i >= b.len() && !borrow {
            break;
        }
        let y = b.get(i).copied().unwrap_or(0);
        let (diff, o) = limb.sub_with_borrowing(y, borrow);
        *limb = diff;
        borrow = o;
    }
    debug_assert!(!borrow, "magnitude subtraction underflow");
}

/// Schoolbook multiplication.
pub(crate) fn mul(a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = x.mul_with_carrying(y, carry);
            let (sum, c) = out[i + j].add_with_carrying(lo, false);
            out[i + j] = sum;
            // x * y + carry <= 2^128 - 2^64, so hi + 1 cannot overflow
            carry = hi + c as u64;
        }
        out[i + b.len()] = carry;
    }
    normalize(out)
}

pub(crate) fn shl(a: &[u64], shift: usize) -> Vec<u64> {
    if a.is_empty() {
        return Vec::new();
    }
    let (limbs, bits) = (shift / LIMB_BITS, shift % LIMB_BITS);
    let mut out = Vec::with_capacity(limbs + a.len() + 1);
    out.resize(limbs, 0);
    if bits == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0u64;
        for &x in a {
            out.push((x << bits) | carry);
            carry = x >> (LIMB_BITS - bits);
        }
        out.push(carry);
    }
    normalize(out)
}

pub(crate) fn shr(a: &[u64], shift: usize) -> Vec<u64> {
    let (limbs, bits) = (shift / LIMB_BITS, shift % LIMB_BITS);
    if limbs >= a.len() {
        return Vec::new();
    }
    let src = &a[limbs..];
    if bits == 0 {
        return normalize(src.to_vec());
    }
    let out = src
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let high = src.get(i + 1).copied().unwrap_or(0);
            (x >> bits) | (high << (LIMB_BITS - bits))
        })
        .collect();
    normalize(out)
}

fn shr1_assign(a: &mut Vec<u64>) {
    let mut carry = 0u64;
    for limb in a.iter_mut().rev() {
        let low = *limb & 1;
        *limb = (*limb >> 1) | (carry << (LIMB_BITS - 1));
        carry = low;
    }
    while a.last() == Some(&0) {
        a.pop();
    }
}

/// Restoring binary long division; `b` must be non-zero.
///
/// The divisor is aligned with the dividend's top bit, then every candidate
/// quotient bit is tried from the most significant one downward.
pub(crate) fn div_rem(a: &[u64], b: &[u64]) -> (Vec<u64>, Vec<u64>) {
    debug_assert!(!trim(b).is_empty(), "division by zero magnitude");
    if cmp(a, b) == Ordering::Less {
        return (Vec::new(), normalize(a.to_vec()));
    }
    if let [single] = trim(b) {
        let (quotient, rem) = div_rem_small(a, *single);
        return (quotient, normalize(vec![rem]));
    }

    let shift = bits(a) - bits(b);
    let mut divisor = shl(b, shift);
    let mut rem = normalize(a.to_vec());
    let mut quotient = vec![0u64; shift / LIMB_BITS + 1];
    for position in (0..=shift).rev() {
        if cmp(&rem, &divisor) != Ordering::Less {
            sub_assign(&mut rem, &divisor);
            quotient[position / LIMB_BITS] |= 1 << (position % LIMB_BITS);
        }
        shr1_assign(&mut divisor);
    }
    (normalize(quotient), normalize(rem))
}

/// Division by a single non-zero limb.
pub(crate) fn div_rem_small(a: &[u64], divisor: u64) -> (Vec<u64>, u64) {
    let divisor = divisor as u128;
    let mut quotient = vec![0u64; a.len()];
    let mut rem = 0u128;
    for (i, &limb) in a.iter().enumerate().rev() {
        let current = (rem << LIMB_BITS) | limb as u128;
        quotient[i] = (current / divisor) as u64;
        rem = current % divisor;
    }
    (normalize(quotient), rem as u64)
}
