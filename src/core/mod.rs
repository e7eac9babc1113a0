pub mod convert;
pub mod copy;
pub mod engine;
pub mod locator;

pub use crate::domain::model::{ConvertSettings, CopySettings, ExportOptions, StageReport};
pub use crate::domain::ports::{Exporter, Pipeline};
pub use crate::utils::error::Result;
