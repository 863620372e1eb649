use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use caravel_base::{Currency, CurrencyId, CurrencyRepository};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_currency))
        .route("/:id", get(get_currency))
}

pub async fn create_currency(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCurrencyRequest>,
) -> axum::response::Response {
    let currency = Currency::new(
        CurrencyId::new(caravel_core::EntityId::new()),
        body.code,
        body.name,
    );

    match services.currencies.save(currency) {
        Ok(saved) => (StatusCode::CREATED, Json(dto::currency_json(&saved))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_currency(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "currency") {
        Ok(v) => CurrencyId::new(v),
        Err(resp) => return resp,
    };

    match services.currencies.find(id) {
        Ok(currency) => (StatusCode::OK, Json(dto::currency_json(&currency))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
