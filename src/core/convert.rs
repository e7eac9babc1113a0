use crate::core::locator;
use crate::domain::model::{ConvertSettings, StageReport};
use crate::domain::ports::{Exporter, Pipeline};
use crate::utils::error::{ModelToolError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Converts trained YOLOv8 weights to ONNX and stages the result into
/// the app's assets directory.
pub struct ConvertPipeline<E: Exporter> {
    exporter: E,
    settings: ConvertSettings,
}

impl<E: Exporter> ConvertPipeline<E> {
    pub fn new(exporter: E, settings: ConvertSettings) -> Self {
        Self { exporter, settings }
    }
}

impl<E: Exporter> Pipeline for ConvertPipeline<E> {
    fn locate(&self) -> Result<PathBuf> {
        locator::find_weights(&self.settings.model_dir, &self.settings.weights_name)
    }

    fn produce(&self, input: &Path) -> Result<PathBuf> {
        tracing::info!("Loading YOLOv8 model from: {}", input.display());
        let output = self.exporter.export(input, &self.settings.export)?;

        if !output.is_file() {
            return Err(ModelToolError::ExportOutputMissing { path: output });
        }

        tracing::info!("Successfully converted to ONNX: {}", output.display());
        Ok(output)
    }

    fn stage(&self, artifact: &Path) -> Result<StageReport> {
        fs::create_dir_all(&self.settings.assets_dir)?;

        let destination = self.settings.assets_dir.join(&self.settings.target_name);
        let bytes = fs::copy(artifact, &destination)?;

        tracing::info!(
            "Copied ONNX model to assets: {} ({} bytes)",
            destination.display(),
            bytes
        );
        Ok(StageReport { destination, bytes })
    }
}
