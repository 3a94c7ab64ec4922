//! Validation errors raised before any binning work starts.

/// Which grid dimension an axis error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisName {
    X,
    Y,
}

impl std::fmt::Display for AxisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisName::X => write!(f, "x"),
            AxisName::Y => write!(f, "y"),
        }
    }
}

/// Reasons why a binning call is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum BinError {
    /// `x`, `y` and `z` do not have the same number of samples.
    LengthMismatch { x: usize, y: usize, z: usize },
    /// A statistic named by the caller is not one of the known reducers.
    UnknownStatistic(String),
    /// Fewer than two coordinates, so no resolution can be derived.
    AxisTooShort { axis: AxisName, len: usize },
    /// The first two coordinates coincide or are not finite.
    DegenerateAxis { axis: AxisName },
    /// A coordinate mesh with no rows or no columns.
    EmptyMesh { axis: AxisName },
}

impl std::fmt::Display for BinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinError::LengthMismatch { x, y, z } => {
                write!(f, "sample lengths differ (x={x}, y={y}, z={z})")
            }
            BinError::UnknownStatistic(name) => write!(
                f,
                "unknown statistic '{name}' (expected one of mean, std, sum, count, median, min, max)"
            ),
            BinError::AxisTooShort { axis, len } => {
                write!(f, "{axis}-axis needs at least 2 coordinates, got {len}")
            }
            BinError::DegenerateAxis { axis } => {
                write!(f, "{axis}-axis resolution is zero or not finite")
            }
            BinError::EmptyMesh { axis } => write!(f, "{axis}-mesh is empty"),
        }
    }
}

impl std::error::Error for BinError {}
