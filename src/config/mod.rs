pub mod toml_config;

use crate::domain::model::{ConvertSettings, CopySettings, ExportOptions};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_image_size, validate_path, validate_range, Validate,
};
use clap::Parser;
use std::path::PathBuf;

// Defaults reproduce the paths the pipeline has always used; every one
// of them can be overridden on the command line or in the TOML file.
pub const DEFAULT_MODEL_DIR: &str = "D:/temp/development/flutter/model-plantwise";
pub const DEFAULT_SOURCE_WEIGHTS: &str =
    "D:/temp/development/flutter/model-plantwise/runs/detect/yolov8_custom_finetuned/weights/best.pt";
pub const DEFAULT_ASSETS_DIR: &str = "assets/models";
pub const DEFAULT_WEIGHTS_NAME: &str = "best.pt";
pub const ONNX_TARGET_NAME: &str = "plant_disease_model.onnx";
pub const TFLITE_TARGET_NAME: &str = "plant_disease_model.tflite";

#[derive(Debug, Clone, Parser)]
#[command(name = "convert-model")]
#[command(about = "Convert trained YOLOv8 weights (.pt) to ONNX and stage them into Flutter assets")]
pub struct ConvertConfig {
    /// Directory the trained model lives in
    #[arg(long, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: PathBuf,

    /// File name of the trained weights
    #[arg(long, default_value = DEFAULT_WEIGHTS_NAME)]
    pub weights_name: String,

    /// Flutter assets directory the converted model is staged into
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// File name the staged model gets in the assets directory
    #[arg(long, default_value = ONNX_TARGET_NAME)]
    pub target_name: String,

    /// Input image size for the exported model
    #[arg(long, default_value_t = 640)]
    pub image_size: u32,

    /// ONNX opset version
    #[arg(long, default_value_t = 11)]
    pub opset: u32,

    /// Skip ONNX graph simplification
    #[arg(long)]
    pub no_simplify: bool,

    /// Export with dynamic input shapes
    #[arg(long)]
    pub dynamic: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConvertConfig {
    pub fn settings(&self) -> ConvertSettings {
        ConvertSettings {
            model_dir: self.model_dir.clone(),
            weights_name: self.weights_name.clone(),
            assets_dir: self.assets_dir.clone(),
            target_name: self.target_name.clone(),
            export: ExportOptions {
                image_size: self.image_size,
                opset: self.opset,
                simplify: !self.no_simplify,
                dynamic: self.dynamic,
            },
        }
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validate_path("model_dir", &self.model_dir)?;
        validate_path("assets_dir", &self.assets_dir)?;
        validate_file_name("weights_name", &self.weights_name, "pt")?;
        validate_file_name("target_name", &self.target_name, "onnx")?;
        validate_image_size("image_size", self.image_size)?;
        validate_range("opset", self.opset, 7, 21)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "copy-model")]
#[command(about = "Copy a pre-converted TensorFlow Lite model into the Flutter assets directory")]
pub struct CopyConfig {
    /// Path to the trained weights the converted model lives next to
    #[arg(long, default_value = DEFAULT_SOURCE_WEIGHTS)]
    pub source: PathBuf,

    /// Flutter assets directory the model is staged into
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// File name the staged model gets in the assets directory
    #[arg(long, default_value = TFLITE_TARGET_NAME)]
    pub target_name: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CopyConfig {
    pub fn settings(&self) -> CopySettings {
        CopySettings {
            source: self.source.clone(),
            assets_dir: self.assets_dir.clone(),
            target_name: self.target_name.clone(),
        }
    }
}

impl Validate for CopyConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source)?;
        validate_path("assets_dir", &self.assets_dir)?;
        validate_file_name("target_name", &self.target_name, "tflite")?;
        Ok(())
    }
}
