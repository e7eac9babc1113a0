use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Required tool '{tool}' is not installed or not on PATH")]
    MissingDependency { tool: String, hint: String },

    #[error("Could not find {name} under {dir}")]
    WeightsNotFound {
        name: String,
        dir: PathBuf,
        searched: Vec<PathBuf>,
    },

    #[error("Export command failed ({status}): {stderr}")]
    ExportFailed { status: String, stderr: String },

    #[error("Export reported success but output file not found: {path}")]
    ExportOutputMissing { path: PathBuf },

    #[error("No converted model (.{extension}) found in {dir}")]
    ConvertedModelMissing { dir: PathBuf, extension: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ModelToolError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Conversion,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ModelToolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::WeightsNotFound { .. } | Self::ConvertedModelMissing { .. } => {
                ErrorCategory::Input
            }
            Self::MissingDependency { .. }
            | Self::ExportFailed { .. }
            | Self::ExportOutputMissing { .. } => ErrorCategory::Conversion,
            Self::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingDependency { .. } => ErrorSeverity::Critical,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::TomlError(_)
            | Self::WeightsNotFound { .. }
            | Self::ConvertedModelMissing { .. } => ErrorSeverity::High,
            Self::ExportFailed { .. } | Self::ExportOutputMissing { .. } | Self::IoError(_) => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingDependency { tool, .. } => {
                format!("'{}' is not available on this machine", tool)
            }
            Self::WeightsNotFound { name, searched, .. } => {
                let mut message = format!("Could not find the {} model file. Searched in:", name);
                for path in searched {
                    message.push_str(&format!("\n  - {}", path.display()));
                }
                message
            }
            Self::ExportFailed { .. } => "ONNX export failed".to_string(),
            Self::ExportOutputMissing { .. } => {
                "ONNX export finished but no output file was produced".to_string()
            }
            Self::ConvertedModelMissing { extension, .. } => {
                format!("No .{} model found", extension)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingDependency { hint, .. } => hint.clone(),
            Self::WeightsNotFound { name, dir, .. } => format!(
                "Train the model first, or point --model-dir at the directory containing {} (currently {})",
                name,
                dir.display()
            ),
            Self::ExportFailed { .. } => {
                "Try a different Python version (3.11 or 3.12); newer versions have known export issues".to_string()
            }
            Self::ExportOutputMissing { path } => format!(
                "Re-run the export and check that {} is writable",
                path.parent().unwrap_or_else(|| std::path::Path::new(".")).display()
            ),
            Self::ConvertedModelMissing { dir, extension } => format!(
                "Convert the trained model to .{0} and place it in {1}, or stage it manually into the assets directory",
                extension,
                dir.display()
            ),
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Check the command line flags and the TOML configuration file".to_string()
            }
            Self::TomlError(_) => "Make sure the file exists and is valid TOML format".to_string(),
            Self::IoError(_) => {
                "Check filesystem permissions and free space, then copy the model manually if needed".to_string()
            }
        }
    }
}
