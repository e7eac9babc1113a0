use plantwise_model_tools::utils::error::ModelToolError;
use plantwise_model_tools::{
    ConvertPipeline, ConvertSettings, ExportOptions, Exporter, ModelEngine,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stands in for the ultralytics CLI: writes `<stem>.onnx` next to the
/// weights, or reports the expected path without producing it.
struct FakeExporter {
    produce_output: bool,
    payload: Vec<u8>,
}

impl FakeExporter {
    fn working() -> Self {
        Self {
            produce_output: true,
            payload: b"onnx-model-bytes".to_vec(),
        }
    }

    fn broken() -> Self {
        Self {
            produce_output: false,
            payload: Vec::new(),
        }
    }
}

impl Exporter for FakeExporter {
    fn export(
        &self,
        weights: &Path,
        _options: &ExportOptions,
    ) -> plantwise_model_tools::Result<PathBuf> {
        let output = weights.with_extension("onnx");
        if self.produce_output {
            fs::write(&output, &self.payload)?;
        }
        Ok(output)
    }
}

fn settings(model_dir: &Path, assets_dir: &Path) -> ConvertSettings {
    ConvertSettings {
        model_dir: model_dir.to_path_buf(),
        weights_name: "best.pt".to_string(),
        assets_dir: assets_dir.to_path_buf(),
        target_name: "plant_disease_model.onnx".to_string(),
        export: ExportOptions::default(),
    }
}

fn write_weights(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"pytorch-weights").unwrap();
}

#[test]
fn test_convert_stages_onnx_into_assets() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model-plantwise");
    let assets_dir = temp_dir.path().join("assets/models");

    let weights = model_dir.join("runs/detect/train/weights/best.pt");
    write_weights(&weights);

    let pipeline = ConvertPipeline::new(FakeExporter::working(), settings(&model_dir, &assets_dir));
    let report = ModelEngine::new(pipeline).run().unwrap();

    let destination = assets_dir.join("plant_disease_model.onnx");
    assert_eq!(report.destination, destination);
    assert!(destination.is_file());

    // Staged copy is byte-for-byte the exporter's output.
    let source_len = fs::metadata(weights.with_extension("onnx")).unwrap().len();
    let dest_len = fs::metadata(&destination).unwrap().len();
    assert_eq!(dest_len, source_len);
    assert_eq!(report.bytes, dest_len);
}

#[test]
fn test_convert_creates_missing_assets_directory() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model-plantwise");
    let assets_dir = temp_dir.path().join("deeply/nested/assets/models");

    write_weights(&model_dir.join("best.pt"));
    assert!(!assets_dir.exists());

    let pipeline = ConvertPipeline::new(FakeExporter::working(), settings(&model_dir, &assets_dir));
    ModelEngine::new(pipeline).run().unwrap();

    assert!(assets_dir.join("plant_disease_model.onnx").is_file());
}

#[test]
fn test_convert_without_weights_fails_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model-plantwise");
    let assets_dir = temp_dir.path().join("assets/models");
    fs::create_dir_all(&model_dir).unwrap();

    let pipeline = ConvertPipeline::new(FakeExporter::working(), settings(&model_dir, &assets_dir));
    let err = ModelEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, ModelToolError::WeightsNotFound { .. }));
    assert!(!assets_dir.exists());
}

#[test]
fn test_convert_fails_when_export_output_missing() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model-plantwise");
    let assets_dir = temp_dir.path().join("assets/models");

    write_weights(&model_dir.join("best.pt"));

    let pipeline = ConvertPipeline::new(FakeExporter::broken(), settings(&model_dir, &assets_dir));
    let err = ModelEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, ModelToolError::ExportOutputMissing { .. }));
    assert!(!assets_dir.exists());
}

#[test]
fn test_convert_finds_weights_in_custom_run_directory() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model-plantwise");
    let assets_dir = temp_dir.path().join("assets/models");

    // Not one of the fixed candidates; only the recursive walk finds it.
    write_weights(&model_dir.join("runs/detect/yolov8_custom_finetuned/weights/best.pt"));

    let pipeline = ConvertPipeline::new(FakeExporter::working(), settings(&model_dir, &assets_dir));
    let report = ModelEngine::new(pipeline).run().unwrap();

    assert!(report.destination.is_file());
}
