use plantwise_model_tools::utils::error::ModelToolError;
use plantwise_model_tools::{CopyPipeline, CopySettings, ModelEngine};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn settings(source: &Path, assets_dir: &Path) -> CopySettings {
    CopySettings {
        source: source.to_path_buf(),
        assets_dir: assets_dir.to_path_buf(),
        target_name: "plant_disease_model.tflite".to_string(),
    }
}

fn write_file(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_copy_stages_tflite_next_to_weights() {
    let temp_dir = TempDir::new().unwrap();
    let weights = temp_dir.path().join("weights/best.pt");
    let assets_dir = temp_dir.path().join("assets/models");

    write_file(&weights, b"pytorch-weights");
    write_file(&weights.with_file_name("best.tflite"), b"tflite-model-bytes");

    let pipeline = CopyPipeline::new(settings(&weights, &assets_dir));
    let report = ModelEngine::new(pipeline).run().unwrap();

    let destination = assets_dir.join("plant_disease_model.tflite");
    assert_eq!(report.destination, destination);
    assert!(destination.is_file());

    // Destination byte length equals the source byte length.
    assert_eq!(
        fs::metadata(&destination).unwrap().len(),
        b"tflite-model-bytes".len() as u64
    );
    assert_eq!(report.bytes, b"tflite-model-bytes".len() as u64);
}

#[test]
fn test_copy_succeeds_when_destination_already_staged() {
    let temp_dir = TempDir::new().unwrap();
    let weights = temp_dir.path().join("weights/best.pt");
    let assets_dir = temp_dir.path().join("assets/models");

    // No trained weights on disk, only a previously staged model.
    let destination = assets_dir.join("plant_disease_model.tflite");
    write_file(&destination, b"already-staged");

    let pipeline = CopyPipeline::new(settings(&weights, &assets_dir));
    let report = ModelEngine::new(pipeline).run().unwrap();

    assert_eq!(report.destination, destination);
    assert_eq!(report.bytes, b"already-staged".len() as u64);
    // Content untouched, no rewrite happened.
    assert_eq!(fs::read(&destination).unwrap(), b"already-staged");
}

#[test]
fn test_copy_without_tflite_fails_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let weights = temp_dir.path().join("weights/best.pt");
    let assets_dir = temp_dir.path().join("assets/models");

    write_file(&weights, b"pytorch-weights");

    let pipeline = CopyPipeline::new(settings(&weights, &assets_dir));
    let err = ModelEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, ModelToolError::ConvertedModelMissing { .. }));
    assert!(!assets_dir.join("plant_disease_model.tflite").exists());
}

#[test]
fn test_copy_fails_when_nothing_exists() {
    let temp_dir = TempDir::new().unwrap();
    let weights = temp_dir.path().join("weights/best.pt");
    let assets_dir = temp_dir.path().join("assets/models");

    let pipeline = CopyPipeline::new(settings(&weights, &assets_dir));
    let err = ModelEngine::new(pipeline).run().unwrap_err();

    match err {
        ModelToolError::WeightsNotFound { searched, .. } => {
            assert!(searched.contains(&weights));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!assets_dir.exists());
}

#[test]
fn test_copy_ignores_non_tflite_siblings() {
    let temp_dir = TempDir::new().unwrap();
    let weights = temp_dir.path().join("weights/best.pt");
    let assets_dir = temp_dir.path().join("assets/models");

    write_file(&weights, b"pytorch-weights");
    write_file(&weights.with_file_name("best.onnx"), b"onnx-model");
    write_file(&weights.with_file_name("results.csv"), b"epoch,loss");

    let pipeline = CopyPipeline::new(settings(&weights, &assets_dir));
    let err = ModelEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, ModelToolError::ConvertedModelMissing { .. }));
}
