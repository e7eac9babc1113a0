use crate::config::{ConvertConfig, CopyConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_image_size, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional TOML configuration applied over the CLI defaults. Every
/// field is optional; only what is present overrides the flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub model: Option<ModelSection>,
    pub convert: Option<ConvertSection>,
    pub assets: Option<AssetsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSection {
    pub dir: Option<PathBuf>,
    pub weights_name: Option<String>,
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertSection {
    pub image_size: Option<u32>,
    pub opset: Option<u32>,
    pub simplify: Option<bool>,
    pub dynamic: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsSection {
    pub dir: Option<PathBuf>,
    pub onnx_name: Option<String>,
    pub tflite_name: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn apply_to_convert(&self, config: &mut ConvertConfig) {
        if let Some(model) = &self.model {
            if let Some(dir) = &model.dir {
                config.model_dir = dir.clone();
            }
            if let Some(name) = &model.weights_name {
                config.weights_name = name.clone();
            }
        }
        if let Some(convert) = &self.convert {
            if let Some(size) = convert.image_size {
                config.image_size = size;
            }
            if let Some(opset) = convert.opset {
                config.opset = opset;
            }
            if let Some(simplify) = convert.simplify {
                config.no_simplify = !simplify;
            }
            if let Some(dynamic) = convert.dynamic {
                config.dynamic = dynamic;
            }
        }
        if let Some(assets) = &self.assets {
            if let Some(dir) = &assets.dir {
                config.assets_dir = dir.clone();
            }
            if let Some(name) = &assets.onnx_name {
                config.target_name = name.clone();
            }
        }
    }

    pub fn apply_to_copy(&self, config: &mut CopyConfig) {
        if let Some(model) = &self.model {
            if let Some(source) = &model.source {
                config.source = source.clone();
            }
        }
        if let Some(assets) = &self.assets {
            if let Some(dir) = &assets.dir {
                config.assets_dir = dir.clone();
            }
            if let Some(name) = &assets.tflite_name {
                config.target_name = name.clone();
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(convert) = &self.convert {
            if let Some(size) = convert.image_size {
                validate_image_size("convert.image_size", size)?;
            }
            if let Some(opset) = convert.opset {
                validate_range("convert.opset", opset, 7, 21)?;
            }
        }
        Ok(())
    }
}
