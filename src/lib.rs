pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::exporter::UltralyticsExporter;
pub use crate::config::{ConvertConfig, CopyConfig};
pub use crate::core::{convert::ConvertPipeline, copy::CopyPipeline, engine::ModelEngine};
pub use crate::domain::model::{ConvertSettings, CopySettings, ExportOptions, StageReport};
pub use crate::domain::ports::{Exporter, Pipeline};
pub use crate::utils::error::{ModelToolError, Result};
