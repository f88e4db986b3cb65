//! Validated affine transforms and their application to axis data

// crate modules
use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::parsers;

// external crates
use log::trace;

// nom parser combinators
use nom::combinator::all_consuming;

/// A validated affine rescaling of one plot axis
///
/// The only way to construct one is [AffineTransform::parse], so anything of
/// this type has already passed validation and holds the closed-form
/// coefficients of `value -> value * scale / divisor + offset`. An invalid
/// formula can never reach [AffineTransform::apply].
///
/// ```rust
/// # use dtools_rescale::{AffineTransform, Axis};
/// let transform = AffineTransform::parse("2*x+3", Axis::X).unwrap();
/// assert_eq!(transform.apply(&[0.0, 1.0, 2.0]), vec![3.0, 5.0, 7.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    axis: Axis,
    scale: f64,
    divisor: f64,
    offset: f64,
}

impl AffineTransform {
    /// Validate a formula for `axis` and compile it to coefficients
    ///
    /// The formula must reference the reserved variable of `axis` exactly
    /// once, and decompose around it into a leading term that is empty, a
    /// sign, or `<number>*`, and a trailing term that is empty or an
    /// operator-led run of numeric literals. Coefficients accept scientific
    /// notation. Outer whitespace is trimmed, interior whitespace is not
    /// part of the grammar.
    ///
    /// ```rust
    /// # use dtools_rescale::{AffineTransform, Axis};
    /// assert!(AffineTransform::parse("-1e3*y+2", Axis::Y).is_ok());
    /// assert!(AffineTransform::parse("x+y", Axis::X).is_err());
    /// ```
    pub fn parse(formula: &str, axis: Axis) -> Result<Self> {
        let formula = formula.trim();

        if formula.contains(axis.other().symbol()) {
            return Err(Error::ForeignVariable {
                expected: axis,
                found: axis.other(),
            });
        }

        // split around the reserved variable, which must appear exactly once
        let (lead, trail) = match formula.matches(axis.symbol()).count() {
            1 => match formula.split_once(axis.symbol()) {
                Some(fragments) => fragments,
                None => return Err(Error::MissingVariable(axis)),
            },
            0 => return Err(Error::MissingVariable(axis)),
            _ => return Err(Error::RepeatedVariable(axis)),
        };

        let (_, scale) = all_consuming(parsers::leading_fragment)(lead)
            .map_err(|_| Error::MalformedLeadingTerm(lead.to_string()))?;

        let (_, trailing) = all_consuming(parsers::trailing_fragment)(trail)
            .map_err(|_| Error::MalformedTrailingTerm(trail.to_string()))?;

        let transform = Self {
            axis,
            scale: scale * trailing.scale,
            divisor: trailing.divisor,
            offset: trailing.offset,
        };

        trace!("parsed \"{formula}\" as {transform}");
        Ok(transform)
    }

    /// Rescale a sample sequence into a new one of equal length and order
    ///
    /// The input is untouched, so callers can keep the original values
    /// around and discard the rescaled copy to reset a plot.
    ///
    /// ```rust
    /// # use dtools_rescale::{AffineTransform, Axis};
    /// let transform = AffineTransform::parse("-x", Axis::X).unwrap();
    /// assert_eq!(transform.apply(&[1.0, -1.0, 2.0]), vec![-1.0, 1.0, -2.0]);
    /// ```
    pub fn apply(&self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|value| self.apply_one(*value)).collect()
    }

    /// Rescale a single value
    pub fn apply_one(&self, value: f64) -> f64 {
        value * self.scale / self.divisor + self.offset
    }

    /// The axis this transform was validated for
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Effective multiplier `a` of `a*value + b`
    pub fn scale(&self) -> f64 {
        self.scale / self.divisor
    }

    /// Constant offset `b` of `a*value + b`
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Check for the identity transform (e.g. the `"x"` formula)
    ///
    /// ```rust
    /// # use dtools_rescale::{AffineTransform, Axis};
    /// let transform = AffineTransform::parse("y", Axis::Y).unwrap();
    /// assert_eq!(transform.is_identity(), true);
    /// ```
    pub fn is_identity(&self) -> bool {
        self.scale() == 1.0 && self.offset == 0.0
    }
}

impl std::fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.scale {
            s if s == 1.0 => write!(f, "{}", self.axis)?,
            s if s == -1.0 => write!(f, "-{}", self.axis)?,
            s => write!(f, "{}*{}", s, self.axis)?,
        }
        if self.divisor != 1.0 {
            write!(f, "/{}", self.divisor)?;
        }
        if self.offset != 0.0 {
            write!(f, "{:+}", self.offset)?;
        }
        Ok(())
    }
}

/// Check the validity of an input formula for the given axis
///
/// Only affine transforms of the reserved variable are allowed. Pure
/// predicate with no side effects, for callers that only need accept/reject.
///
/// ```rust
/// # use dtools_rescale::{validate, Axis};
/// assert_eq!(validate("x/2-1.5e1", Axis::X), true);
/// assert_eq!(validate("x+y", Axis::X), false);
/// assert_eq!(validate("2", Axis::X), false);
/// ```
pub fn validate(formula: &str, axis: Axis) -> bool {
    AffineTransform::parse(formula, axis).is_ok()
}

/// Validate a formula and apply it to a sample sequence in one call
///
/// A rejected formula leaves `samples` untouched and reports why, blocking
/// only this request.
///
/// ```rust
/// # use dtools_rescale::{rescale, Axis};
/// let rescaled = rescale("2*y+3", Axis::Y, &[0.0, 1.0]).unwrap();
/// assert_eq!(rescaled, vec![3.0, 5.0]);
/// ```
pub fn rescale(formula: &str, axis: Axis, samples: &[f64]) -> Result<Vec<f64>> {
    Ok(AffineTransform::parse(formula, axis)?.apply(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_are_closed_form() {
        let transform = AffineTransform::parse("-2*x/4+1+2", Axis::X).unwrap();
        assert_eq!(transform.scale(), -0.5);
        assert_eq!(transform.offset(), 3.0);
        assert_eq!(transform.axis(), Axis::X);
    }

    #[test]
    fn identity_detection() {
        assert!(AffineTransform::parse("x", Axis::X).unwrap().is_identity());
        assert!(AffineTransform::parse("+y", Axis::Y).unwrap().is_identity());
        assert!(!AffineTransform::parse("-x", Axis::X).unwrap().is_identity());
        assert!(!AffineTransform::parse("x+0.1", Axis::X)
            .unwrap()
            .is_identity());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for formula in ["x", "-x", "2*x", "x/2", "2.5*x+3", "x/2-15"] {
            let transform = AffineTransform::parse(formula, Axis::X).unwrap();
            let redisplayed = AffineTransform::parse(&transform.to_string(), Axis::X).unwrap();
            assert_eq!(transform, redisplayed);
        }
    }

    #[test]
    fn rejection_reasons() {
        assert!(matches!(
            AffineTransform::parse("x+y", Axis::X),
            Err(Error::ForeignVariable {
                expected: Axis::X,
                found: Axis::Y
            })
        ));
        assert!(matches!(
            AffineTransform::parse("2", Axis::X),
            Err(Error::MissingVariable(Axis::X))
        ));
        assert!(matches!(
            AffineTransform::parse("x*x", Axis::X),
            Err(Error::RepeatedVariable(Axis::X))
        ));
        assert!(matches!(
            AffineTransform::parse("2x", Axis::X),
            Err(Error::MalformedLeadingTerm(_))
        ));
        assert!(matches!(
            AffineTransform::parse("x^2", Axis::X),
            Err(Error::MalformedTrailingTerm(_))
        ));
    }

    #[test]
    fn outer_whitespace_is_trimmed() {
        assert!(validate("  2*x+3  ", Axis::X));
        assert!(!validate("2 * x", Axis::X));
    }

    #[test]
    fn division_keeps_ieee_semantics() {
        let transform = AffineTransform::parse("x/0", Axis::X).unwrap();
        assert_eq!(transform.apply_one(1.0), f64::INFINITY);
    }
}
