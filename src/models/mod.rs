pub mod employee;
pub mod food;
pub mod record;
pub mod user;

pub use employee::*;
pub use food::*;
pub use record::*;
pub use user::*;

use serde::Serialize;

use crate::utils::AppError;

/// Schema checks applied to request bodies before they reach a repository.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// A document type stored in its own collection.
pub trait Entity: Serialize + Validate + Send + Sync + 'static {
    const COLLECTION: &'static str;
    /// Human readable name used in messages ("Food not found").
    const LABEL: &'static str;
}

/// Entities that accept partial updates.
pub trait Updatable: Entity {
    type Patch: Serialize + Validate + Send + Sync;
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub(crate) fn optional_text(field: &str, value: Option<&String>) -> Result<(), AppError> {
    value.map_or(Ok(()), |v| require_text(field, v))
}

pub(crate) fn non_negative(field: &str, value: Option<f64>) -> Result<(), AppError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AppError::InvalidArgument(format!(
            "{} must be a non-negative number",
            field
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn email_shape(field: &str, value: &str) -> Result<(), AppError> {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::InvalidArgument(format!("{} must be a valid email", field))),
    }
}
