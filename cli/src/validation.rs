use crate::error::AppError;

/// Core validation trait that all validators must implement.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Maximum length of a single file name on common Linux filesystems
pub const MAX_ASSET_NAME_LEN: usize = 255;

/// Validation errors for asset names handed to the config writer
#[derive(Debug, Clone, PartialEq)]
pub enum AssetValidationError {
    PathSeparator { name: String },
    NulByte { name: String },
    RelativeComponent { name: String },
    LeadingDash { name: String },
    TooLong { name: String, length: usize },
}

impl AssetValidationError {
    pub fn user_message(&self) -> String {
        match self {
            AssetValidationError::PathSeparator { name } => {
                format!("Asset name '{name}' must not contain '/'")
            }
            AssetValidationError::NulByte { name } => {
                format!("Asset name '{}' contains a NUL byte", name.escape_debug())
            }
            AssetValidationError::RelativeComponent { name } => {
                format!("Asset name '{name}' is not a file or directory name")
            }
            AssetValidationError::LeadingDash { name } => {
                format!("Asset name '{name}' must not start with '-'")
            }
            AssetValidationError::TooLong { name, length } => {
                format!(
                    "Asset name '{name}' is too long ({length} bytes, max {MAX_ASSET_NAME_LEN})"
                )
            }
        }
    }
}

impl From<AssetValidationError> for AppError {
    fn from(error: AssetValidationError) -> Self {
        AppError::Validation(error.user_message())
    }
}

/// Validator for asset names that end up in file paths and command arguments.
///
/// Empty names are accepted: they mean "leave this category unset".
pub struct AssetNameValidator;

impl Validator<str> for AssetNameValidator {
    type Error = AssetValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Ok(());
        }
        let name = input.to_string();

        if input.contains('/') {
            return Err(AssetValidationError::PathSeparator { name });
        }
        if input.contains('\0') {
            return Err(AssetValidationError::NulByte { name });
        }
        if input == "." || input == ".." {
            return Err(AssetValidationError::RelativeComponent { name });
        }
        // Would be parsed as an option by gsettings and kitten
        if input.starts_with('-') {
            return Err(AssetValidationError::LeadingDash { name });
        }
        if input.len() > MAX_ASSET_NAME_LEN {
            return Err(AssetValidationError::TooLong {
                length: input.len(),
                name,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        let validator = AssetNameValidator;
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("Gruvbox Dark").is_ok());
        assert!(validator.validate("Catppuccin-Mocha-Standard-Blue-Dark").is_ok());
        assert!(validator.validate("wall.paper.png").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        let validator = AssetNameValidator;
        assert!(matches!(
            validator.validate("../etc"),
            Err(AssetValidationError::PathSeparator { .. })
        ));
        assert!(matches!(
            validator.validate(".."),
            Err(AssetValidationError::RelativeComponent { .. })
        ));
        assert!(matches!(
            validator.validate("--reset"),
            Err(AssetValidationError::LeadingDash { .. })
        ));
        assert!(matches!(
            validator.validate(&"x".repeat(300)),
            Err(AssetValidationError::TooLong { length: 300, .. })
        ));
    }

    #[test]
    fn test_error_converts_to_app_error() {
        let err: AppError = AssetValidationError::PathSeparator {
            name: "a/b".to_string(),
        }
        .into();
        assert_eq!(
            err,
            AppError::Validation("Asset name 'a/b' must not contain '/'".to_string())
        );
    }
}
