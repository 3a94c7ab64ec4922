use crate::axis::GridAxes;
use crate::binner::BinParams;
use crate::reduce::Statistic;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ScatterGridConfig {
    /// JSON file holding `x`, `y` and `z` arrays.
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub grid: GridConfig,
    #[serde(default)]
    pub statistic: Statistic,
    #[serde(default)]
    pub params: BinParams,
    pub output: ScatterGridOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    pub x: AxisConfig,
    pub y: AxisConfig,
}

impl GridConfig {
    pub fn to_axes(&self) -> Result<GridAxes, String> {
        let xq = self.x.coords().map_err(|e| format!("grid.x: {e}"))?;
        let yq = self.y.coords().map_err(|e| format!("grid.y: {e}"))?;
        GridAxes::from_vectors(&xq, &yq).map_err(|e| e.to_string())
    }
}

/// Axis coordinates, either listed or generated from a range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisConfig {
    Values(Vec<f64>),
    /// `start, start + step, ...` up to and including `stop`. A negative
    /// `step` produces a descending axis.
    Range { start: f64, stop: f64, step: f64 },
}

impl AxisConfig {
    pub fn coords(&self) -> Result<Vec<f64>, String> {
        match *self {
            AxisConfig::Values(ref values) => Ok(values.clone()),
            AxisConfig::Range { start, stop, step } => {
                if !(step.is_finite() && start.is_finite() && stop.is_finite()) || step == 0.0 {
                    return Err(format!("invalid range {start}..{stop} step {step}"));
                }
                let span = (stop - start) / step;
                if span < 0.0 {
                    return Err(format!("step {step} never reaches {stop} from {start}"));
                }
                // Tolerate rounding so `stop` itself is included.
                let n = (span + 1e-9).floor() as usize + 1;
                Ok((0..n).map(|i| start + i as f64 * step).collect())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScatterGridOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    #[serde(default)]
    pub preview_png: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ScatterGridConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_axis_forms_and_defaults() {
        let json = r#"{
            "input": "samples.json",
            "grid": {
                "x": [0.0, 1.0, 2.0],
                "y": { "start": 1.0, "stop": 0.0, "step": -0.25 }
            },
            "output": { "result_json": "out/result.json" }
        }"#;
        let cfg: ScatterGridConfig = serde_json::from_str(json).expect("config");
        assert_eq!(cfg.statistic, Statistic::Mean);
        assert!(cfg.params.with_counts);
        assert!(cfg.output.preview_png.is_none());
        assert_eq!(cfg.grid.x.coords().unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(
            cfg.grid.y.coords().unwrap(),
            vec![1.0, 0.75, 0.5, 0.25, 0.0]
        );
        let axes = cfg.grid.to_axes().expect("axes");
        assert_eq!(axes.shape(), (5, 3));
    }

    #[test]
    fn statistic_and_params_are_read() {
        let json = r#"{
            "input": "s.json",
            "grid": { "x": [0, 1], "y": [0, 1] },
            "statistic": "median",
            "params": { "with_counts": false },
            "output": { "result_json": "r.json", "preview_png": "p.png" }
        }"#;
        let cfg: ScatterGridConfig = serde_json::from_str(json).expect("config");
        assert_eq!(cfg.statistic, Statistic::Median);
        assert!(!cfg.params.with_counts);
        assert_eq!(cfg.output.preview_png, Some(PathBuf::from("p.png")));
    }

    #[test]
    fn statistic_names_ignore_case_like_the_cli() {
        let json = r#"{
            "input": "s.json",
            "grid": { "x": [0, 1], "y": [0, 1] },
            "statistic": "Median",
            "output": { "result_json": "r.json" }
        }"#;
        let cfg: ScatterGridConfig = serde_json::from_str(json).expect("config");
        assert_eq!(cfg.statistic, Statistic::Median);
        assert_eq!(cfg.statistic, "Median".parse::<Statistic>().unwrap());
    }

    #[test]
    fn unknown_statistic_is_a_parse_error() {
        let json = r#"{
            "input": "s.json",
            "grid": { "x": [0, 1], "y": [0, 1] },
            "statistic": "first",
            "output": { "result_json": "r.json" }
        }"#;
        assert!(serde_json::from_str::<ScatterGridConfig>(json).is_err());
    }

    #[test]
    fn range_in_wrong_direction_is_rejected() {
        let axis = AxisConfig::Range {
            start: 0.0,
            stop: 1.0,
            step: -0.5,
        };
        assert!(axis.coords().is_err());
    }
}
