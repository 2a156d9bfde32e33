use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::database::StoreError;

/// Failure taxonomy shared by every handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message exposed to the client. Internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Unauthorized(_) => "Unauthorized access".to_string(),
            AppError::Internal(_) => "Internal Server Error".to_string(),
            AppError::Conflict(msg) | AppError::NotFound(msg) | AppError::InvalidArgument(msg) => {
                msg.clone()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Internal(detail) => log::error!("❌ {}", detail),
            AppError::Unauthorized(reason) => log::warn!("🔒 Rejected credential: {}", reason),
            other => log::warn!("⚠️  {}", other),
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.public_message()
        }))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(msg) => AppError::Conflict(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn internal_errors_hide_their_detail() {
        let err = AppError::Internal("connection reset by peer".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Internal Server Error");
    }

    #[test]
    fn store_errors_map_onto_taxonomy() {
        let dup: AppError = StoreError::DuplicateKey("email already registered".into()).into();
        assert!(matches!(dup, AppError::Conflict(_)));

        let db: AppError = StoreError::Database("timeout".into()).into();
        assert!(matches!(db, AppError::Internal(_)));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = AppError::NotFound("Food not found".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Food not found");
    }
}
