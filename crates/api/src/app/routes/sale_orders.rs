use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use caravel_base::{CompanyId, CurrencyId, PartnerId};
use caravel_sale::{SaleOrderId, SaleOrderRepository};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_sale_orders).post(create_sale_order))
        .route("/:id", get(get_sale_order))
        .route("/status", put(change_sale_order_status))
}

pub async fn create_sale_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateSaleOrderRequest>,
) -> axum::response::Response {
    let client_partner = match errors::parse_id(&body.client_partner_id, "client partner") {
        Ok(v) => PartnerId::new(v),
        Err(resp) => return resp,
    };

    let company = match body.company_id {
        Some(raw) => match errors::parse_id(&raw, "company") {
            Ok(v) => Some(CompanyId::new(v)),
            Err(resp) => return resp,
        },
        None => None,
    };
    let contact_partner = match body.contact_partner_id {
        Some(raw) => match errors::parse_id(&raw, "contact partner") {
            Ok(v) => Some(PartnerId::new(v)),
            Err(resp) => return resp,
        },
        None => None,
    };
    let currency = match body.currency_id {
        Some(raw) => match errors::parse_id(&raw, "currency") {
            Ok(v) => Some(CurrencyId::new(v)),
            Err(resp) => return resp,
        },
        None => None,
    };

    match services.generator.create_sale_order(
        client_partner,
        company,
        contact_partner,
        currency,
        body.in_ati,
    ) {
        Ok(order) => (StatusCode::CREATED, Json(dto::sale_order_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_sale_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let orders: Vec<_> = services.orders.all().iter().map(dto::sale_order_json).collect();
    (StatusCode::OK, Json(serde_json::json!({"items": orders}))).into_response()
}

pub async fn get_sale_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "sale order") {
        Ok(v) => SaleOrderId::new(v),
        Err(resp) => return resp,
    };

    match services.orders.find(id) {
        Ok(order) => (StatusCode::OK, Json(dto::sale_order_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn change_sale_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ChangeStatusRequest>,
) -> axum::response::Response {
    let id = match errors::parse_id(&body.sale_order_id, "sale order") {
        Ok(v) => SaleOrderId::new(v),
        Err(resp) => return resp,
    };

    let order = match services.orders.find(id) {
        Ok(order) => order,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.engine.change_sale_order_status(&order, body.status) {
        Ok(updated) => (StatusCode::OK, Json(dto::sale_order_json(&updated))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
