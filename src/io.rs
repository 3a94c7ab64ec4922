//! I/O helpers for sample files, JSON reports and grid previews.
//!
//! - `load_samples_json`: read `{ "x": [...], "y": [...], "z": [...] }`.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `save_grid_png`: write a value grid as an 8-bit grayscale PNG.
use image::{GrayImage, Luma};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Owned scattered samples as stored on disk. NaN z-values are written as
/// `null` by most JSON producers and read back as NaN.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SampleFile {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(deserialize_with = "nullable_f64")]
    pub z: Vec<f64>,
}

fn nullable_f64<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Load scattered samples from a JSON file.
pub fn load_samples_json(path: &Path) -> Result<SampleFile, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read samples {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse samples {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Map finite grid values linearly onto [1, 255]; non-finite cells become 0.
pub fn grid_to_gray(values: &DMatrix<f64>) -> GrayImage {
    let (rows, cols) = values.shape();
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;
    let mut out = GrayImage::new(cols as u32, rows as u32);
    for r in 0..rows {
        for c in 0..cols {
            let v = values[(r, c)];
            let px = if !v.is_finite() {
                0
            } else if span > 0.0 {
                (1.0 + (v - lo) / span * 254.0).round().clamp(1.0, 255.0) as u8
            } else {
                255
            };
            out.put_pixel(c as u32, r as u32, Luma([px]));
        }
    }
    out
}

/// Save a value grid as a grayscale PNG, row 0 at the top.
pub fn save_grid_png(values: &DMatrix<f64>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    grid_to_gray(values)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
