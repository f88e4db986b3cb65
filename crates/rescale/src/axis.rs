use crate::error::Error;

/// The plot axis a rescaling formula is permitted to reference
///
/// Each axis reserves a single-character variable name, and a formula
/// submitted for one axis may only reference that name. A formula targeting
/// the x-axis that mentions `y` is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis, reserved variable `x`
    X,
    /// Vertical axis, reserved variable `y`
    Y,
}

impl Axis {
    /// The reserved variable name for this axis
    ///
    /// ```rust
    /// # use dtools_rescale::Axis;
    /// assert_eq!(Axis::X.symbol(), 'x');
    /// assert_eq!(Axis::Y.symbol(), 'y');
    /// ```
    pub const fn symbol(&self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }

    /// The opposite axis
    ///
    /// ```rust
    /// # use dtools_rescale::Axis;
    /// assert_eq!(Axis::X.other(), Axis::Y);
    /// ```
    pub const fn other(&self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(Error::FailedToInferAxis(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_from_string() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert!("z".parse::<Axis>().is_err());
        assert!("xy".parse::<Axis>().is_err());
    }
}
