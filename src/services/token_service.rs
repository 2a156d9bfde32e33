use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::utils::AppError;

/// Name of the cookie carrying the session credential.
pub const TOKEN_COOKIE: &str = "token";

/// JWT payload: whatever identity the client posted, plus issue/expiry times.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Map<String, Value>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Best-effort label for logs.
    pub fn subject(&self) -> &str {
        ["email", "sub", "name"]
            .iter()
            .find_map(|key| self.identity.get(*key).and_then(Value::as_str))
            .unwrap_or("unknown")
    }
}

/// Signs and verifies session credentials and shapes the cookie that
/// transports them.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    secure_cookie: bool,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration, secure_cookie: bool) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            secure_cookie,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.token_secret,
            Duration::hours(config.token_ttl_hours),
            config.production,
        )
    }

    /// Sign `identity` verbatim. Any `iat`/`exp` it carries are replaced.
    pub fn issue(&self, identity: Value) -> Result<String, AppError> {
        let Value::Object(mut identity) = identity else {
            return Err(AppError::InvalidArgument(
                "Token payload must be a JSON object".to_string(),
            ));
        };
        identity.remove("iat");
        identity.remove("exp");

        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.ttl)
            .filter(|exp| *exp > now)
            .ok_or_else(|| AppError::Internal(format!("Token lifetime {} is unusable", self.ttl)))?;
        let claims = Claims {
            identity,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Token signing failed: {}", e)))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid or expired token: {}", e)))
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(TOKEN_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(self.same_site())
            .finish()
    }

    /// Expires the client's cookie. A copied token stays valid until `exp`.
    pub fn cleared_cookie(&self) -> Cookie<'static> {
        Cookie::build(TOKEN_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(self.same_site())
            .max_age(CookieDuration::ZERO)
            .finish()
    }

    fn same_site(&self) -> SameSite {
        if self.secure_cookie {
            SameSite::None
        } else {
            SameSite::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::hours(10), false)
    }

    #[test]
    fn issued_token_verifies_with_original_identity() {
        let tokens = service();
        let token = tokens.issue(json!({ "email": "a@b.com" })).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.identity.get("email"), Some(&json!("a@b.com")));
        assert_eq!(claims.identity.len(), 1);
        assert_eq!(claims.exp - claims.iat, 10 * 3600);
        assert_eq!(claims.subject(), "a@b.com");
    }

    #[test]
    fn caller_cannot_pick_expiry() {
        let tokens = service();
        let token = tokens.issue(json!({ "email": "a@b.com", "exp": 1 })).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = service().issue(json!("a@b.com")).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let tokens = service();
        let issued = Utc::now() - Duration::hours(12);
        let claims = Claims {
            identity: json!({ "email": "a@b.com" }).as_object().cloned().unwrap(),
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(10)).timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &tokens.encoding).unwrap();
        assert!(matches!(tokens.verify(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn unusable_lifetime_fails_instead_of_minting() {
        for ttl in [Duration::hours(3_000_000_000), Duration::hours(-1), Duration::zero()] {
            let tokens = TokenService::new("test-secret", ttl, false);
            let err = tokens.issue(json!({ "email": "a@b.com" })).unwrap_err();
            assert!(matches!(err, AppError::Internal(_)));
        }
    }

    #[test]
    fn foreign_signature_is_unauthorized() {
        let other = TokenService::new("another-secret", Duration::hours(1), false);
        let token = other.issue(json!({ "email": "a@b.com" })).unwrap();
        assert!(matches!(service().verify(&token), Err(AppError::Unauthorized(_))));
        assert!(matches!(service().verify("garbage"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn cookie_attributes_follow_environment() {
        let dev = service().session_cookie("t".into());
        assert_eq!(dev.name(), TOKEN_COOKIE);
        assert_eq!(dev.http_only(), Some(true));
        assert_eq!(dev.same_site(), Some(SameSite::Strict));
        assert_ne!(dev.secure(), Some(true));

        let prod = TokenService::new("s", Duration::hours(1), true).session_cookie("t".into());
        assert_eq!(prod.secure(), Some(true));
        assert_eq!(prod.same_site(), Some(SameSite::None));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cookie = service().cleared_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }
}
