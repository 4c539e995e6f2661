use crate::utils::error::{SampleError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// 確保值只佔一行輸出
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("notification.message", "hello").is_ok());
        assert!(validate_non_empty("notification.message", "").is_err());
        assert!(validate_non_empty("notification.message", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("notification.message", "one line").is_ok());
        assert!(validate_single_line("notification.message", "two\nlines").is_err());
        assert!(validate_single_line("notification.message", "carriage\rreturn").is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = validate_single_line("notification.message", "a\nb").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("notification.message"));
        assert!(text.contains("line breaks"));
    }
}
