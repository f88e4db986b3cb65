//! Module for affine rescaling of plot axis data
//!
//! Diffraction measurements of the same sample arrive on different scales
//! depending on the source, so curves need a scale and an offset before they
//! can be compared on one plot. Rescaling formulae are entered by the user as
//! free text and are restricted to affine transforms of a single reserved
//! variable:
//!
//! | Form     | Example      | Meaning                    |
//! | -------- | ------------ | -------------------------- |
//! | `±x`     | `-x`         | sign flip                  |
//! | `±a*x`   | `2.5*x`      | scale                      |
//! | `x/a`    | `x/2`        | scale by reciprocal        |
//! | `... ±b` | `2*x-1.5e1`  | scale then offset          |
//!
//! The same forms apply for `y` instead of `x`. Anything else, such as
//! polynomials, both variables at once, or function calls, is rejected.
//!
//! - [AffineTransform] - a validated formula in closed form, ready to apply
//! - [Axis] - the reserved variable (`x` or `y`) a formula may reference
//! - [validate] - pure accept/reject predicate for one formula
//! - [rescale] - validate-then-apply convenience for one-shot submissions
//!
//! A formula is compiled to `a`/`b` coefficients at parse time and applied by
//! direct arithmetic. User text is never evaluated as code.
//!
//! # Quickstart example
//!
//! ```rust
//! use dtools_rescale::{validate, AffineTransform, Axis};
//!
//! // Reject anything that is not affine in the target variable
//! assert!(validate("2*x+3", Axis::X));
//! assert!(!validate("x*x", Axis::X));
//!
//! // Parse once, then rescale the measured axis values
//! let transform = AffineTransform::parse("x/2-1.5e1", Axis::X).unwrap();
//! assert_eq!(transform.apply(&[10.0, 20.0]), vec![-10.0, -5.0]);
//! ```

mod axis;
mod error;
mod parsers;
mod transform;

// flatten public API and inline the documentation
#[doc(inline)]
pub use axis::Axis;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use transform::{rescale, validate, AffineTransform};
