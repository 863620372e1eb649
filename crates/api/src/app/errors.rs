use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use caravel_core::{DomainError, EntityId};

/// Map a domain error onto a consistent JSON response.
///
/// The business-rule family is one response class (422); the ambient
/// variants keep their own statuses.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    if err.is_business_rule() {
        return json_error(StatusCode::UNPROCESSABLE_ENTITY, "inconsistency", err.to_string());
    }
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        other => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "inconsistency",
            other.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Parse a path/body identifier or answer with a 400.
pub fn parse_id(s: &str, what: &'static str) -> Result<EntityId, axum::response::Response> {
    s.parse::<EntityId>().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            format!("invalid {what} id"),
        )
    })
}
