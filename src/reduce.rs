//! Per-cell reductions.
//!
//! A [`Reducer`] turns the full, nonempty slice of z-values that landed in
//! one cell into a single output value. It is called at most once per cell,
//! never incrementally, and the order of values inside the slice is not
//! specified. Any `Fn(&[Z]) -> O` closure is a reducer; [`Statistic`] covers
//! the common named reductions.

use crate::error::BinError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Value written into cells that received no samples.
pub trait Fill: nalgebra::Scalar + Copy + Send + Sync {
    fn fill() -> Self;
}

impl Fill for f32 {
    #[inline]
    fn fill() -> Self {
        f32::NAN
    }
}

impl Fill for f64 {
    #[inline]
    fn fill() -> Self {
        f64::NAN
    }
}

/// Numeric z-value accepted by the binner.
pub trait ZValue: Copy + Send + Sync {
    fn to_f64(self) -> f64;
    /// True for floating-point NaN; integers never are.
    fn is_nan(self) -> bool;
}

impl ZValue for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl ZValue for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Fill for $t {
                #[inline]
                fn fill() -> Self {
                    0
                }
            }

            impl ZValue for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn is_nan(self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Reduction applied to the z-values of one nonempty cell.
pub trait Reducer<Z>: Sync {
    type Output: Fill;

    fn reduce(&self, values: &[Z]) -> Self::Output;
}

impl<Z, O, F> Reducer<Z> for F
where
    F: Fn(&[Z]) -> O + Sync,
    O: Fill,
{
    type Output = O;

    #[inline]
    fn reduce(&self, values: &[Z]) -> O {
        self(values)
    }
}

/// Named reductions with `f64` output.
///
/// Deserialized through [`FromStr`], so config files accept the same
/// spellings as the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    #[default]
    Mean,
    /// Population standard deviation (divisor `n`).
    Std,
    Sum,
    Count,
    Median,
    Min,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; 7] = [
        Statistic::Mean,
        Statistic::Std,
        Statistic::Sum,
        Statistic::Count,
        Statistic::Median,
        Statistic::Min,
        Statistic::Max,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Sum => "sum",
            Statistic::Count => "count",
            Statistic::Median => "median",
            Statistic::Min => "min",
            Statistic::Max => "max",
        }
    }

    /// Apply the statistic to a nonempty slice.
    pub fn apply<Z: ZValue>(self, values: &[Z]) -> f64 {
        let n = values.len() as f64;
        match self {
            Statistic::Mean => sum(values) / n,
            Statistic::Std => {
                let mean = sum(values) / n;
                let var = values
                    .iter()
                    .map(|v| {
                        let d = v.to_f64() - mean;
                        d * d
                    })
                    .sum::<f64>()
                    / n;
                var.sqrt()
            }
            Statistic::Sum => sum(values),
            Statistic::Count => n,
            Statistic::Median => median(values),
            Statistic::Min => values
                .iter()
                .map(|v| v.to_f64())
                .fold(f64::INFINITY, f64::min),
            Statistic::Max => values
                .iter()
                .map(|v| v.to_f64())
                .fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

impl<Z: ZValue> Reducer<Z> for Statistic {
    type Output = f64;

    #[inline]
    fn reduce(&self, values: &[Z]) -> f64 {
        self.apply(values)
    }
}

impl FromStr for Statistic {
    type Err = BinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Statistic::ALL
            .into_iter()
            .find(|st| st.name() == wanted)
            .ok_or_else(|| BinError::UnknownStatistic(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Statistic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn sum<Z: ZValue>(values: &[Z]) -> f64 {
    values.iter().map(|v| v.to_f64()).sum()
}

fn median<Z: ZValue>(values: &[Z]) -> f64 {
    let mut sorted: Vec<f64> = values.iter().map(|v| v.to_f64()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let m = sorted.len();
    if m % 2 == 1 {
        sorted[m / 2]
    } else {
        0.5 * (sorted[m / 2 - 1] + sorted[m / 2])
    }
}
