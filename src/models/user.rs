use serde::{Deserialize, Serialize};

use super::{email_shape, optional_text, Entity, Validate};
use crate::utils::AppError;

/// Registered customer. `email` is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(alias = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// The comparison key for `email`: surrounding whitespace dropped, lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl User {
    pub fn normalized(&self) -> Self {
        Self {
            email: normalize_email(&self.email),
            ..self.clone()
        }
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), AppError> {
        email_shape("email", &self.email)?;
        optional_text("name", self.name.as_ref())
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_firebase_photo_alias() {
        let user: User =
            serde_json::from_str(r#"{"email":"a@b.com","photoURL":"https://img/1.png"}"#).unwrap();
        assert_eq!(user.photo.as_deref(), Some("https://img/1.png"));
    }

    #[test]
    fn normalized_email_is_trimmed_and_lowercased() {
        let user = User {
            email: "  Chef@Example.COM ".into(),
            name: Some("Rina".into()),
            photo: None,
        };
        let normalized = user.normalized();
        assert_eq!(normalized.email, "chef@example.com");
        assert_eq!(normalized.name.as_deref(), Some("Rina"));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let user = User {
            email: "not-an-email".into(),
            name: None,
            photo: None,
        };
        assert!(user.validate().is_err());
    }
}
