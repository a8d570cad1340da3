// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use tracing::debug;
use wallet_bigint::{BigInt, Modulus};
use wallet_config::{CurveConfig, NamedCurve};

use crate::{secp256k1::secp256k1, sqrt, EccError, Point, Result};

/// Base point and the prime order of the subgroup it generates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Group {
    pub(crate) n: Modulus,
    pub(crate) gx: BigInt,
    pub(crate) gy: BigInt,
}

/// The curve `y^2 = x^3 + a*x + b` over the prime field `F_p`.
///
/// Coefficients are stored reduced into `[0, p)`. A curve built with
/// [`Curve::with_generator`] also carries a base point `G` and its order
/// `n`, which signing and key derivation require.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: Modulus,
    group: Option<Group>,
}

fn validation_failure(reason: &'static str) -> EccError {
    debug!(reason, "curve parameters rejected");
    EccError::CurveValidation(reason)
}

/// Hex field from a curve configuration, with or without a `0x` prefix.
fn parse_hex(field: &str) -> Result<BigInt> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    Ok(BigInt::from_str_radix(digits, 16)?)
}

impl Curve {
    /// Validates and builds a curve without a base point.
    ///
    /// `p` must be a prime above 3 and the discriminant
    /// `4a^3 + 27b^2` must be non-zero modulo `p`.
    pub fn new(a: BigInt, b: BigInt, p: BigInt) -> Result<Self> {
        if p <= BigInt::from(3) || !p.is_probable_prime() {
            return Err(validation_failure("field modulus must be a prime greater than 3"));
        }
        let p = Modulus::new(p)?;
        let a = p.reduce(&a);
        let b = p.reduce(&b);

        let four_a_cubed = p.mul(&BigInt::from(4), &p.mul(&a, &p.mul(&a, &a)));
        let twenty_seven_b_squared = p.mul(&BigInt::from(27), &p.mul(&b, &b));
        if p.add(&four_a_cubed, &twenty_seven_b_squared).is_zero() {
            return Err(validation_failure("curve is singular"));
        }
        Ok(Self { a, b, p, group: None })
    }

    /// Validates and builds a curve with base point `(gx, gy)` of order `n`.
    ///
    /// The base point must lie on the curve and `n*G` must be the point at
    /// infinity.
    pub fn with_generator(
        a: BigInt,
        b: BigInt,
        p: BigInt,
        n: BigInt,
        gx: BigInt,
        gy: BigInt,
    ) -> Result<Self> {
        let mut curve = Self::new(a, b, p)?;
        if n <= BigInt::one() {
            return Err(validation_failure("subgroup order must be greater than 1"));
        }
        {
            let generator = curve.point(gx.clone(), gy.clone())?;
            if !generator.multiply(&n).is_infinity() {
                return Err(validation_failure("n*G is not the point at infinity"));
            }
        }
        curve.group = Some(Group {
            n: Modulus::new(n)?,
            gx,
            gy,
        });
        Ok(curve)
    }

    /// Builds a curve from hex parameters, validating it like
    /// [`Curve::new`] or [`Curve::with_generator`].
    ///
    /// A config named [`NamedCurve::Secp256k1`] must carry exactly the
    /// secp256k1 parameters, base point included.
    pub fn from_config(config: &CurveConfig) -> Result<Self> {
        let a = parse_hex(&config.a)?;
        let b = parse_hex(&config.b)?;
        let p = parse_hex(&config.p)?;
        let curve = match &config.group {
            None => Self::new(a, b, p)?,
            Some(group) => Self::with_generator(
                a,
                b,
                p,
                parse_hex(&group.n)?,
                parse_hex(&group.gx)?,
                parse_hex(&group.gy)?,
            )?,
        };
        if config.name == NamedCurve::Secp256k1 && curve != *secp256k1() {
            return Err(validation_failure("parameters do not match the named curve secp256k1"));
        }
        Ok(curve)
    }

    /// Assembles well-known parameters without re-running validation.
    pub(crate) fn from_trusted_parts(
        a: BigInt,
        b: BigInt,
        p: Modulus,
        n: Modulus,
        gx: BigInt,
        gy: BigInt,
    ) -> Self {
        Self {
            a,
            b,
            p,
            group: Some(Group { n, gx, gy }),
        }
    }

    #[inline]
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    #[inline]
    pub fn p(&self) -> &BigInt {
        self.p.value()
    }

    /// The field modulus in its arithmetic form.
    #[inline]
    pub fn field(&self) -> &Modulus {
        &self.p
    }

    /// Order of the base point, if the curve has one.
    #[inline]
    pub fn order(&self) -> Option<&BigInt> {
        self.group.as_ref().map(|group| group.n.value())
    }

    /// Byte width of one encoded field coordinate.
    #[inline]
    pub fn coordinate_size(&self) -> usize {
        self.p.bits().div_ceil(8)
    }

    /// Byte width of one encoded scalar, `None` without a base point.
    #[inline]
    pub fn scalar_size(&self) -> Option<usize> {
        self.group.as_ref().map(|group| group.n.bits().div_ceil(8))
    }

    /// Whether both curves share the equation and field, base point aside.
    pub(crate) fn same_equation(&self, other: &Curve) -> bool {
        core::ptr::eq(self, other) || (self.p == other.p && self.a == other.a && self.b == other.b)
    }

    pub(crate) fn group(&self) -> Result<&Group> {
        self.group.as_ref().ok_or(EccError::NoGenerator)
    }

    pub fn generator(&self) -> Result<Point<'_>> {
        let group = self.group()?;
        Ok(Point::affine(self, group.gx.clone(), group.gy.clone()))
    }

    #[inline]
    pub fn infinity(&self) -> Point<'_> {
        Point::infinity(self)
    }

    /// `x^3 + a*x + b mod p`.
    fn rhs(&self, x: &BigInt) -> BigInt {
        let p = &self.p;
        let x_cubed = p.mul(x, &p.mul(x, x));
        p.add(&p.add(&x_cubed, &p.mul(&self.a, x)), &self.b)
    }

    /// Whether the affine pair satisfies the curve equation.
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        self.p.contains(x) && self.p.contains(y) && self.p.mul(y, y) == self.rhs(x)
    }

    /// Affine point with the given coordinates.
    pub fn point(&self, x: BigInt, y: BigInt) -> Result<Point<'_>> {
        if !self.p.contains(&x) || !self.p.contains(&y) {
            return Err(EccError::CurveValidation("coordinate outside [0, p)"));
        }
        if !self.contains(&x, &y) {
            return Err(EccError::CurveValidation("point is not on the curve"));
        }
        Ok(Point::affine(self, x, y))
    }

    /// Recovers the point with abscissa `x` whose ordinate has the requested
    /// parity.
    pub fn point_from_x(&self, x: BigInt, even: bool) -> Result<Point<'_>> {
        if !self.p.contains(&x) {
            return Err(EccError::CurveValidation("coordinate outside [0, p)"));
        }
        let alpha = self.rhs(&x);
        let beta = sqrt::mod_sqrt(&alpha, &self.p)
            .ok_or(EccError::CurveValidation("x has no point on the curve"))?;
        if beta.is_zero() && !even {
            return Err(EccError::CurveValidation("the only point with this x has an even y"));
        }
        let y = if beta.is_even() == even { beta } else { self.p.neg(&beta) };
        Ok(Point::affine(self, x, y))
    }
}
