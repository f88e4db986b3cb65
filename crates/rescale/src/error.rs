//! Result and Error types for dtools-rescale

use crate::axis::Axis;

/// Type alias for Result<T, rescale::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `dtools-rescale` crate
///
/// Every variant is a rejection of a single rescaling request. None are
/// fatal to the caller, and a rejected formula leaves the targeted sample
/// sequence untouched.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Formula references the variable reserved for the other axis
    #[error("formula references \"{found}\" but rescales the {expected}-axis")]
    ForeignVariable {
        /// The axis the formula was submitted for
        expected: Axis,
        /// The reserved variable actually found in the formula
        found: Axis,
    },

    /// Formula never references the reserved variable
    #[error("formula never references \"{0}\"")]
    MissingVariable(Axis),

    /// Reserved variable appears more than once
    #[error("formula must reference \"{0}\" exactly once")]
    RepeatedVariable(Axis),

    /// Term before the variable is not empty, a sign, or `<number>*`
    #[error("malformed term \"{0}\" before the variable")]
    MalformedLeadingTerm(String),

    /// Term after the variable is not a scale/offset of numeric literals
    #[error("malformed term \"{0}\" after the variable")]
    MalformedTrailingTerm(String),

    /// Unable to infer an axis from a string
    #[error("failed to infer axis from \"{0}\"")]
    FailedToInferAxis(String),
}
