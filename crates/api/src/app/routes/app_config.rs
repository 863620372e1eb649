use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::put, Json, Router};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/app-config", put(put_app_config))
}

/// System-wide feature flags (currently only the loyalty toggle).
pub async fn put_app_config(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AppConfigRequest>,
) -> axum::response::Response {
    services.config.set_loyalty_enabled(body.loyalty_enabled);
    (
        StatusCode::OK,
        Json(serde_json::json!({"loyalty_enabled": body.loyalty_enabled})),
    )
        .into_response()
}
