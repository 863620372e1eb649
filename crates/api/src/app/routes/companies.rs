use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use caravel_base::{Company, CompanyId, CompanyRepository, CurrencyId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_company))
        .route("/:id", get(get_company))
        .route("/:id/sale-config", put(put_sale_config))
}

pub async fn create_company(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCompanyRequest>,
) -> axum::response::Response {
    if body.name.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "name must not be empty",
        );
    }

    let mut company = Company::new(CompanyId::new(caravel_core::EntityId::new()), body.name);
    if let Some(currency) = body.currency_id {
        match errors::parse_id(&currency, "currency") {
            Ok(cid) => company = company.with_currency(CurrencyId::new(cid)),
            Err(resp) => return resp,
        }
    }

    match services.companies.save(company) {
        Ok(saved) => (StatusCode::CREATED, Json(dto::company_json(&saved))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_company(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "company") {
        Ok(v) => CompanyId::new(v),
        Err(resp) => return resp,
    };

    match services.companies.find(id) {
        Ok(company) => (StatusCode::OK, Json(dto::company_json(&company))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn put_sale_config(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SaleConfigRequest>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "company") {
        Ok(v) => CompanyId::new(v),
        Err(resp) => return resp,
    };
    if let Err(e) = services.companies.find(id) {
        return errors::domain_error_to_response(e);
    }

    let policy = match dto::parse_tax_inclusion(&body.tax_inclusion) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    services.config.set_policy(id, policy);
    (
        StatusCode::OK,
        Json(serde_json::json!({"company_id": id.to_string(), "tax_inclusion": policy})),
    )
        .into_response()
}
