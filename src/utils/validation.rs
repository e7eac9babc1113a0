use crate::utils::error::{ModelToolError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let value = path.to_string_lossy();

    if value.is_empty() {
        return Err(ModelToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if value.contains('\0') {
        return Err(ModelToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_name(field_name: &str, value: &str, expected_extension: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File name cannot be empty or whitespace-only".to_string(),
        });
    }

    match Path::new(value).extension().and_then(|ext| ext.to_str()) {
        Some(extension) if extension == expected_extension => Ok(()),
        Some(extension) => Err(ModelToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Expected: {}",
                extension, expected_extension
            ),
        }),
        None => Err(ModelToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ModelToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_image_size(field_name: &str, value: u32) -> Result<()> {
    validate_range(field_name, value, 32, 4096)?;

    if value % 32 != 0 {
        return Err(ModelToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Image size must be a multiple of 32".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("model_dir", Path::new("/models")).is_ok());
        assert!(validate_path("model_dir", Path::new("relative/dir")).is_ok());
        assert!(validate_path("model_dir", &PathBuf::new()).is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("weights_name", "best.pt", "pt").is_ok());
        assert!(validate_file_name("weights_name", "best.onnx", "pt").is_err());
        assert!(validate_file_name("weights_name", "best", "pt").is_err());
        assert!(validate_file_name("weights_name", "  ", "pt").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("opset", 11u32, 7, 21).is_ok());
        assert!(validate_range("opset", 6u32, 7, 21).is_err());
        assert!(validate_range("opset", 22u32, 7, 21).is_err());
    }

    #[test]
    fn test_validate_image_size() {
        assert!(validate_image_size("image_size", 640).is_ok());
        assert!(validate_image_size("image_size", 320).is_ok());
        assert!(validate_image_size("image_size", 100).is_err());
        assert!(validate_image_size("image_size", 8192).is_err());
    }
}
