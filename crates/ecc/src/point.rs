// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use wallet_bigint::BigInt;

use crate::{Curve, EccError, Result};

/// A point on a [`Curve`]: either affine `(x, y)` or the point at infinity.
///
/// Points borrow their curve, so two points can only be combined when they
/// share one. Coordinates of affine points are always in `[0, p)` and on
/// the curve.
#[derive(Clone)]
pub struct Point<'c> {
    curve: &'c Curve,
    coordinates: Option<(BigInt, BigInt)>,
}

impl<'c> Point<'c> {
    #[inline]
    pub(crate) fn infinity(curve: &'c Curve) -> Self {
        Self {
            curve,
            coordinates: None,
        }
    }

    #[inline]
    pub(crate) fn affine(curve: &'c Curve, x: BigInt, y: BigInt) -> Self {
        Self {
            curve,
            coordinates: Some((x, y)),
        }
    }

    #[inline]
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.coordinates.is_none()
    }

    #[inline]
    pub fn x(&self) -> Option<&BigInt> {
        self.coordinates.as_ref().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<&BigInt> {
        self.coordinates.as_ref().map(|(_, y)| y)
    }

    /// Whether this point lives on `curve`.
    ///
    /// Only the equation and field are compared, so a point on
    /// `Curve::new(a, b, p)` also lives on any curve with the same
    /// `(a, b, p)` and a base point.
    pub fn is_on(&self, curve: &Curve) -> bool {
        self.curve.same_equation(curve)
    }

    /// Group addition, rejecting points from different curves.
    pub fn add(&self, other: &Point<'c>) -> Result<Point<'c>> {
        if !self.is_on(other.curve) {
            return Err(EccError::CurveMismatch);
        }
        Ok(self.add_unchecked(other))
    }

    pub(crate) fn add_unchecked(&self, other: &Point<'c>) -> Point<'c> {
        let Some((x1, y1)) = &self.coordinates else {
            return other.clone();
        };
        let Some((x2, y2)) = &other.coordinates else {
            return self.clone();
        };
        if x1 == x2 {
            return if y1 == y2 {
                self.double()
            } else {
                Point::infinity(self.curve)
            };
        }

        let f = self.curve.field();
        // p is prime, so a non-zero difference is invertible
        let Some(inverse) = f.inverse(&f.sub(x2, x1)) else {
            return Point::infinity(self.curve);
        };
        let slope = f.mul(&f.sub(y2, y1), &inverse);
        self.chord(&slope, x1, y1, x2)
    }

    /// Point doubling with the tangent slope `(3x^2 + a) / 2y`.
    pub fn double(&self) -> Point<'c> {
        let Some((x, y)) = &self.coordinates else {
            return self.clone();
        };
        if y.is_zero() {
            return Point::infinity(self.curve);
        }

        let f = self.curve.field();
        let numerator = f.add(&f.mul(&BigInt::from(3), &f.mul(x, x)), self.curve.a());
        let Some(inverse) = f.inverse(&f.add(y, y)) else {
            return Point::infinity(self.curve);
        };
        let slope = f.mul(&numerator, &inverse);
        self.chord(&slope, x, y, x)
    }

    /// Third intersection of the line through `(x1, y1)` with `slope`,
    /// reflected over the x-axis.
    fn chord(&self, slope: &BigInt, x1: &BigInt, y1: &BigInt, x2: &BigInt) -> Point<'c> {
        let f = self.curve.field();
        let x3 = f.sub(&f.sub(&f.mul(slope, slope), x1), x2);
        let y3 = f.sub(&f.mul(slope, &f.sub(x1, &x3)), y1);
        Point::affine(self.curve, x3, y3)
    }

    /// Reflection `(x, -y mod p)`; infinity maps to itself.
    pub fn negate(&self) -> Point<'c> {
        match &self.coordinates {
            None => self.clone(),
            Some((x, y)) => Point::affine(self.curve, x.clone(), self.curve.field().neg(y)),
        }
    }

    /// Scalar multiple `k*P` by double-and-add, scanning `k` from the
    /// least significant bit.
    ///
    /// A zero scalar yields infinity; a negative one negates `|k|*P`.
    pub fn multiply(&self, k: &BigInt) -> Point<'c> {
        if k.is_negative() {
            return self.multiply(&k.abs()).negate();
        }
        let mut result = Point::infinity(self.curve);
        let mut addend = self.clone();
        let top = k.bits();
        for i in 0..top {
            if k.test_bit(i) {
                result = result.add_unchecked(&addend);
            }
            if i + 1 < top {
                addend = addend.double();
            }
        }
        result
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.is_on(other.curve) && self.coordinates == other.coordinates
    }
}

impl Eq for Point<'_> {}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            None => f.write_str("Point(infinity)"),
            Some((x, y)) => f
                .debug_struct("Point")
                .field("x", &format_args!("{x:#x}"))
                .field("y", &format_args!("{y:#x}"))
                .finish(),
        }
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            None => f.write_str("infinity"),
            Some((x, y)) => write!(f, "({x:#x}, {y:#x})"),
        }
    }
}

impl<'c> Add for &Point<'c> {
    type Output = Point<'c>;

    fn add(self, other: &Point<'c>) -> Point<'c> {
        assert!(self.is_on(other.curve), "Cannot add points on different curves");
        self.add_unchecked(other)
    }
}

impl<'c> Sub for &Point<'c> {
    type Output = Point<'c>;

    fn sub(self, other: &Point<'c>) -> Point<'c> {
        assert!(self.is_on(other.curve), "Cannot subtract points on different curves");
        self.add_unchecked(&other.negate())
    }
}

impl<'c> Neg for &Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        self.negate()
    }
}

impl<'c> Mul<&BigInt> for &Point<'c> {
    type Output = Point<'c>;

    fn mul(self, k: &BigInt) -> Point<'c> {
        self.multiply(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    fn toy_curve() -> Curve {
        Curve::with_generator(int(2), int(2), int(17), int(19), int(5), int(1)).unwrap()
    }

    // Multiples of (5, 1) on y^2 = x^3 + 2x + 2 over F_17.
    const MULTIPLES: [(i64, i64); 18] = [
        (5, 1),
        (6, 3),
        (10, 6),
        (3, 1),
        (9, 16),
        (16, 13),
        (0, 6),
        (13, 7),
        (7, 6),
        (7, 11),
        (13, 10),
        (0, 11),
        (16, 4),
        (9, 1),
        (3, 16),
        (10, 11),
        (6, 14),
        (5, 16),
    ];

    #[test]
    fn multiples_of_generator() {
        let curve = toy_curve();
        let g = curve.generator().unwrap();
        let mut acc = curve.infinity();
        for (k, &(x, y)) in MULTIPLES.iter().enumerate() {
            acc = &acc + &g;
            let expected = curve.point(int(x), int(y)).unwrap();
            assert_eq!(acc, expected, "{}G", k + 1);
            assert_eq!(g.multiply(&int(k as i64 + 1)), expected, "{}G", k + 1);
        }
        assert!((&acc + &g).is_infinity());
        assert!(g.multiply(&int(19)).is_infinity());
        assert!(g.multiply(&BigInt::zero()).is_infinity());
    }

    #[test]
    fn double_and_negate() {
        let curve = toy_curve();
        let g = curve.generator().unwrap();
        assert_eq!(g.double(), curve.point(int(6), int(3)).unwrap());
        assert_eq!(-&g, curve.point(int(5), int(16)).unwrap());
        assert!((&g - &g).is_infinity());
        assert_eq!(g.multiply(&int(-2)), g.double().negate());
        assert!(curve.infinity().double().is_infinity());
        assert!(curve.infinity().negate().is_infinity());
    }

    #[test]
    fn points_with_zero_ordinate_double_to_infinity() {
        // y^2 = x^3 + 1 over F_7 contains (6, 0) = (-1, 0)
        let curve = Curve::new(int(0), int(1), int(7)).unwrap();
        let p = curve.point(int(6), int(0)).unwrap();
        assert!(p.double().is_infinity());
        assert_eq!(p.negate(), p);
    }

    #[test]
    fn mixing_curves_is_rejected() {
        let toy = toy_curve();
        let other = Curve::new(int(0), int(1), int(7)).unwrap();
        let g = toy.generator().unwrap();
        let q = other.point(int(6), int(0)).unwrap();
        assert_eq!(g.add(&q).unwrap_err(), EccError::CurveMismatch);
        assert_ne!(g, q);
    }

    #[test]
    fn equal_curves_share_points() {
        let first = toy_curve();
        let second = toy_curve();
        let a = first.generator().unwrap();
        let b = second.generator().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.add(&b).unwrap(), first.point(int(6), int(3)).unwrap());
    }

    #[test]
    fn base_point_does_not_change_the_curve() {
        let bare = Curve::new(int(2), int(2), int(17)).unwrap();
        let full = toy_curve();
        let p = bare.point(int(5), int(1)).unwrap();
        let g = full.generator().unwrap();
        assert!(p.is_on(&full));
        assert!(g.is_on(&bare));
        assert_eq!(p, g);
        assert_eq!(p.add(&g).unwrap(), full.point(int(6), int(3)).unwrap());
        assert_eq!(&g + &p, g.double());
    }

    #[test]
    fn formatting() {
        let curve = toy_curve();
        let g = curve.generator().unwrap();
        assert_eq!(g.to_string(), "(0x5, 0x1)");
        assert_eq!(format!("{g:?}"), "Point { x: 0x5, y: 0x1 }");
        assert_eq!(curve.infinity().to_string(), "infinity");
    }
}
