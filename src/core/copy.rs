use crate::core::locator;
use crate::domain::model::{CopySettings, StageReport};
use crate::domain::ports::Pipeline;
use crate::utils::error::{ModelToolError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONVERTED_EXTENSION: &str = "tflite";

/// Stages a pre-converted TensorFlow Lite model into the app's assets
/// directory. The conversion itself happens elsewhere; this pipeline
/// only finds the `.tflite` next to the trained weights and copies it.
pub struct CopyPipeline {
    settings: CopySettings,
}

impl CopyPipeline {
    pub fn new(settings: CopySettings) -> Self {
        Self { settings }
    }

    fn destination(&self) -> PathBuf {
        self.settings.assets_dir.join(&self.settings.target_name)
    }
}

impl Pipeline for CopyPipeline {
    fn locate(&self) -> Result<PathBuf> {
        let source = &self.settings.source;
        if source.is_file() {
            tracing::info!("Found PyTorch model: {}", source.display());
            return Ok(source.clone());
        }

        // No trained weights, but a previous run may already have staged
        // the converted model.
        let destination = self.destination();
        if destination.is_file() {
            tracing::info!(
                "TensorFlow Lite model already exists: {}",
                destination.display()
            );
            return Ok(destination);
        }

        Err(ModelToolError::WeightsNotFound {
            name: source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "best.pt".to_string()),
            dir: source
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
            searched: vec![source.clone(), destination],
        })
    }

    fn produce(&self, input: &Path) -> Result<PathBuf> {
        let destination = self.destination();
        if input == destination.as_path() {
            // Already staged; nothing to produce.
            return Ok(destination);
        }

        let weights_dir = input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        println!("📁 Model directory contents:");
        let entries = locator::list_weights_dir(&weights_dir)?;
        for entry in &entries {
            println!("   📄 {} ({:.2} MB)", entry.file_name(), entry.size_mb());
        }

        if let Some(converted) = entries.iter().find(|entry| {
            entry
                .path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == CONVERTED_EXTENSION)
                .unwrap_or(false)
        }) {
            return Ok(converted.path.clone());
        }

        if destination.is_file() {
            tracing::info!(
                "TensorFlow Lite model already exists: {}",
                destination.display()
            );
            return Ok(destination);
        }

        Err(ModelToolError::ConvertedModelMissing {
            dir: weights_dir,
            extension: CONVERTED_EXTENSION.to_string(),
        })
    }

    fn stage(&self, artifact: &Path) -> Result<StageReport> {
        let destination = self.destination();

        if artifact == destination.as_path() {
            let bytes = fs::metadata(&destination)?.len();
            return Ok(StageReport { destination, bytes });
        }

        fs::create_dir_all(&self.settings.assets_dir)?;
        let bytes = fs::copy(artifact, &destination)?;

        tracing::info!(
            "Copied TensorFlow Lite model to: {} ({} bytes)",
            destination.display(),
            bytes
        );
        Ok(StageReport { destination, bytes })
    }
}
