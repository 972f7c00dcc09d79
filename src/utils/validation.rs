use crate::utils::error::{MathError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MathError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_not_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(MathError::ValidationError {
            field: field_name.to_string(),
            message: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

/// Names are compared after trimming; `None` entries are skipped.
pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = HashSet::new();
    for name in names.into_iter().flatten() {
        let name = name.trim();
        if !seen.insert(name) {
            return Err(MathError::ValidationError {
                field: field_name.to_string(),
                message: format!("Duplicate name: {}", name),
            });
        }
    }
    Ok(())
}
