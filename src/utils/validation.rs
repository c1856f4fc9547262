use crate::utils::error::{Result, WidgetError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| WidgetError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WidgetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(WidgetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

/// 非負且有限的數值 (NaN 與無限大都不接受)
pub fn validate_non_negative_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(WidgetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(WidgetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not be negative".to_string(),
        });
    }
    Ok(())
}
