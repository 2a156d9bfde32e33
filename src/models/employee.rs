use serde::{Deserialize, Serialize};

use super::{email_shape, non_negative, optional_text, require_text, Entity, Updatable, Validate};
use crate::utils::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Employee {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl Validate for Employee {
    fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("role", &self.role)?;
        if let Some(email) = &self.email {
            email_shape("email", email)?;
        }
        non_negative("salary", self.salary)
    }
}

impl Validate for EmployeePatch {
    fn validate(&self) -> Result<(), AppError> {
        optional_text("name", self.name.as_ref())?;
        optional_text("role", self.role.as_ref())?;
        if let Some(email) = &self.email {
            email_shape("email", email)?;
        }
        non_negative("salary", self.salary)
    }
}

impl Entity for Employee {
    const COLLECTION: &'static str = "employees";
    const LABEL: &'static str = "Employee";
}

impl Updatable for Employee {
    type Patch = EmployeePatch;
}
