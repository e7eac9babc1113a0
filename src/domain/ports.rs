use crate::domain::model::{ExportOptions, StageReport};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// The seam behind which the third-party model conversion lives.
///
/// `export` runs the conversion (the converted file lands next to the
/// input weights) and returns the path the converted model is expected
/// at. Callers verify existence; an exporter that reports success
/// without producing output is a reportable failure, not a panic.
pub trait Exporter: Send + Sync {
    fn export(&self, weights: &Path, options: &ExportOptions) -> Result<PathBuf>;
}

/// A three-stage model pipeline: find the input, produce the portable
/// artifact, stage it into the app's assets directory.
pub trait Pipeline: Send + Sync {
    /// Locate the input model file on disk.
    fn locate(&self) -> Result<PathBuf>;

    /// Produce the portable artifact from the located input.
    fn produce(&self, input: &Path) -> Result<PathBuf>;

    /// Place the artifact into the assets directory and report its size.
    fn stage(&self, artifact: &Path) -> Result<StageReport>;
}
