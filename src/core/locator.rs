use crate::domain::model::WeightsEntry;
use crate::utils::error::{ModelToolError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Training run directories probed before falling back to a full walk.
const TRAIN_RUNS: [&str; 3] = ["train", "train2", "train3"];

/// The fixed locations a training run leaves its weights in, probed in order.
pub fn candidate_paths(model_dir: &Path, weights_name: &str) -> Vec<PathBuf> {
    let mut candidates = vec![model_dir.join(weights_name)];
    for run in TRAIN_RUNS {
        candidates.push(
            model_dir
                .join("runs")
                .join("detect")
                .join(run)
                .join("weights")
                .join(weights_name),
        );
    }
    candidates
}

/// Find the trained weights file under `model_dir`.
///
/// Probes the well-known candidate locations first, then walks the whole
/// directory tree for any file with the target name. The error carries
/// the probed candidates so callers can show what was searched.
pub fn find_weights(model_dir: &Path, weights_name: &str) -> Result<PathBuf> {
    let candidates = candidate_paths(model_dir, weights_name);

    for path in &candidates {
        if path.is_file() {
            tracing::info!("Found model at: {}", path.display());
            return Ok(path.clone());
        }
    }

    tracing::debug!(
        "No candidate path hit, walking {} recursively",
        model_dir.display()
    );
    if let Some(found) = walk_for_file(model_dir, weights_name) {
        tracing::info!("Found model at: {}", found.display());
        return Ok(found);
    }

    Err(ModelToolError::WeightsNotFound {
        name: weights_name.to_string(),
        dir: model_dir.to_path_buf(),
        searched: candidates,
    })
}

fn walk_for_file(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = walk_for_file(&path, file_name) {
                return Some(found);
            }
        } else if path.file_name().and_then(|n| n.to_str()) == Some(file_name) {
            return Some(path);
        }
    }
    None
}

/// List the regular files in a weights directory with their sizes,
/// sorted by path for stable output.
pub fn list_weights_dir(dir: &Path) -> Result<Vec<WeightsEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            let bytes = entry.metadata()?.len();
            entries.push(WeightsEntry { path, bytes });
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}
