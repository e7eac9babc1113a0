use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Options passed to the delegated ONNX export.
///
/// Defaults match the export call the pipeline has always used: static
/// 640x640 input, opset 11, simplified graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub image_size: u32,
    pub opset: u32,
    pub simplify: bool,
    pub dynamic: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            image_size: 640,
            opset: 11,
            simplify: true,
            dynamic: false,
        }
    }
}

/// Everything the convert pipeline needs to run, already resolved from
/// CLI flags and the optional TOML file.
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    pub model_dir: PathBuf,
    pub weights_name: String,
    pub assets_dir: PathBuf,
    pub target_name: String,
    pub export: ExportOptions,
}

/// Resolved settings for the copy pipeline.
#[derive(Debug, Clone)]
pub struct CopySettings {
    pub source: PathBuf,
    pub assets_dir: PathBuf,
    pub target_name: String,
}

/// Outcome of staging a model into the assets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub destination: PathBuf,
    pub bytes: u64,
}

impl StageReport {
    pub fn size_mb(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB
    }
}

/// A regular file found while scanning a weights directory.
#[derive(Debug, Clone)]
pub struct WeightsEntry {
    pub path: PathBuf,
    pub bytes: u64,
}

impl WeightsEntry {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn size_mb(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB
    }
}
