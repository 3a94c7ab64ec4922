//! Parameters controlling a binning call.

use serde::Deserialize;

/// Binner-wide options.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BinParams {
    /// Also produce the per-cell sample count grid.
    pub with_counts: bool,
}

impl Default for BinParams {
    fn default() -> Self {
        Self { with_counts: true }
    }
}
