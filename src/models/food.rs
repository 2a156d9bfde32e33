use serde::{Deserialize, Serialize};

use super::{non_negative, optional_text, require_text, Entity, Updatable, Validate};
use crate::utils::AppError;

/// Menu item stored in the `foods` collection.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Food {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Email of whoever listed the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct FoodPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for Food {
    fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        non_negative("price", Some(self.price))?;
        optional_text("category", self.category.as_ref())?;
        Ok(())
    }
}

impl Validate for FoodPatch {
    fn validate(&self) -> Result<(), AppError> {
        optional_text("name", self.name.as_ref())?;
        non_negative("price", self.price)?;
        optional_text("category", self.category.as_ref())?;
        Ok(())
    }
}

impl Entity for Food {
    const COLLECTION: &'static str = "foods";
    const LABEL: &'static str = "Food";
}

impl Updatable for Food {
    type Patch = FoodPatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = serde_json::from_str::<Food>(r#"{"name":"Pasta","price":10,"colour":"red"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn price_is_required() {
        assert!(serde_json::from_str::<Food>(r#"{"name":"Pasta"}"#).is_err());
    }

    #[test]
    fn negative_price_fails_validation() {
        let food: Food = serde_json::from_str(r#"{"name":"Pasta","price":-1}"#).unwrap();
        assert!(matches!(food.validate(), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn blank_name_fails_validation() {
        let patch = FoodPatch {
            name: Some("   ".into()),
            ..FoodPatch::default()
        };
        assert!(patch.validate().is_err());
    }
}
