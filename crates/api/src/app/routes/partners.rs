use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use caravel_base::{CompanyId, CurrencyId, Partner, PartnerId, PartnerRepository};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_partners).post(create_partner))
        .route("/:id", get(get_partner))
        .route("/:id/loyalty", get(get_partner_loyalty))
}

pub async fn create_partner(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreatePartnerRequest>,
) -> axum::response::Response {
    if body.full_name.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "full_name must not be empty",
        );
    }

    let id = PartnerId::new(caravel_core::EntityId::new());
    let mut partner = match body.kind.as_str() {
        "customer" => Partner::customer(id, body.full_name),
        "contact" => Partner::contact(id, body.full_name),
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_kind",
                "kind must be one of: customer, contact",
            )
        }
    };

    for company in body.company_ids.unwrap_or_default() {
        match errors::parse_id(&company, "company") {
            Ok(cid) => partner = partner.serving_company(CompanyId::new(cid)),
            Err(resp) => return resp,
        }
    }
    for contact in body.contact_ids.unwrap_or_default() {
        match errors::parse_id(&contact, "contact partner") {
            Ok(pid) => partner = partner.with_contact(PartnerId::new(pid)),
            Err(resp) => return resp,
        }
    }
    if let Some(currency) = body.currency_id {
        match errors::parse_id(&currency, "currency") {
            Ok(cid) => partner = partner.with_currency(CurrencyId::new(cid)),
            Err(resp) => return resp,
        }
    }

    match services.partners.save(partner) {
        Ok(saved) => (StatusCode::CREATED, Json(dto::partner_json(&saved))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_partners(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let partners: Vec<_> = services.partners.all().iter().map(dto::partner_json).collect();
    (StatusCode::OK, Json(serde_json::json!({"items": partners}))).into_response()
}

pub async fn get_partner(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "partner") {
        Ok(v) => PartnerId::new(v),
        Err(resp) => return resp,
    };

    match services.partners.find(id) {
        Ok(partner) => (StatusCode::OK, Json(dto::partner_json(&partner))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_partner_loyalty(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "partner") {
        Ok(v) => PartnerId::new(v),
        Err(resp) => return resp,
    };

    if let Err(e) = services.partners.find(id) {
        return errors::domain_error_to_response(e);
    }

    let points = services.loyalty.points(id);
    (
        StatusCode::OK,
        Json(serde_json::json!({"partner_id": id.to_string(), "points": points})),
    )
        .into_response()
}
