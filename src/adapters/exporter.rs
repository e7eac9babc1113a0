use crate::domain::model::ExportOptions;
use crate::domain::ports::Exporter;
use crate::utils::error::{ModelToolError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEFAULT_PROGRAM: &str = "yolo";
const INSTALL_HINT: &str = "Install ultralytics: pip install ultralytics";

/// Delegates the actual conversion to the ultralytics `yolo` CLI.
///
/// The exporter writes the converted model next to the input weights
/// with an `.onnx` extension; we only shell out and map the outcome.
pub struct UltralyticsExporter {
    program: String,
}

impl UltralyticsExporter {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Override the exporter binary, e.g. a wrapper script on machines
    /// where `yolo` is not on PATH.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for UltralyticsExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for UltralyticsExporter {
    fn export(&self, weights: &Path, options: &ExportOptions) -> Result<PathBuf> {
        println!("Converting to ONNX format...");
        println!("This may take a few minutes...");

        let result = Command::new(&self.program)
            .arg("export")
            .arg(format!("model={}", weights.display()))
            .arg("format=onnx")
            .arg(format!("imgsz={}", options.image_size))
            .arg(format!("opset={}", options.opset))
            .arg(format!("simplify={}", options.simplify))
            .arg(format!("dynamic={}", options.dynamic))
            .output();

        let output = match result {
            Ok(output) => output,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ModelToolError::MissingDependency {
                    tool: self.program.clone(),
                    hint: INSTALL_HINT.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        if !output.status.success() {
            return Err(ModelToolError::ExportFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        // ultralytics writes <stem>.onnx next to the source weights.
        Ok(weights.with_extension("onnx"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_maps_to_missing_dependency() {
        let exporter = UltralyticsExporter::with_program("plantwise-no-such-exporter");
        let err = exporter
            .export(Path::new("best.pt"), &ExportOptions::default())
            .unwrap_err();

        match err {
            ModelToolError::MissingDependency { tool, hint } => {
                assert_eq!(tool, "plantwise-no-such-exporter");
                assert!(hint.contains("ultralytics"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
