//! Error type for the HTTP API.
//!
//! [`ApiError`] unifies all client-visible failure modes into a single
//! enum that converts into an Axum HTTP response with a JSON body via
//! its [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::{StoreError, ValidationError};

/// Errors returned by the HTTP API layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request did not carry a user id.
    #[error("User ID required")]
    MissingUserId,

    /// A request field violated a validation constraint.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The requested player does not exist.
    #[error("User not found")]
    NotFound,

    /// The wallet address is already registered.
    #[error("Solana address already registered")]
    DuplicateWallet,

    /// Ticket purchase exceeds the click balance.
    #[error("Not enough clicks: required {required}, available {available}")]
    InsufficientClicks { required: u64, available: u64 },
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateWallet(_) => Self::DuplicateWallet,
            StoreError::PlayerNotFound(_) => Self::NotFound,
            StoreError::InsufficientClicks {
                required,
                available,
            } => Self::InsufficientClicks {
                required,
                available,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingUserId => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DuplicateWallet => StatusCode::CONFLICT,
            Self::InsufficientClicks { .. } => StatusCode::PAYMENT_REQUIRED,
        };

        let body = serde_json::json!({ "message": self.to_string() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_expected_statuses() {
        // テスト項目: StoreError が期待される HTTP ステータスに対応付けられる
        // given (前提条件) / when (操作) / then (期待する結果):
        let duplicate: ApiError = StoreError::DuplicateWallet("x".to_string()).into();
        assert_eq!(duplicate, ApiError::DuplicateWallet);

        let not_found: ApiError = StoreError::PlayerNotFound("x".to_string()).into();
        assert_eq!(not_found, ApiError::NotFound);

        let insufficient: ApiError = StoreError::InsufficientClicks {
            required: 1000,
            available: 500,
        }
        .into();
        assert_eq!(
            insufficient,
            ApiError::InsufficientClicks {
                required: 1000,
                available: 500,
            }
        );
    }
}
