use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use caravel_base::{CompanyId, PartnerId};
use caravel_sale::{Cart, CartId, CartRepository};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_cart))
        .route("/:id", get(get_cart))
        .route("/:id/empty", put(empty_cart))
        .route("/:id/validate", put(validate_cart))
}

pub async fn create_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCartRequest>,
) -> axum::response::Response {
    let mut cart = Cart::new(CartId::new(caravel_core::EntityId::new()));

    if let Some(raw) = body.company_id {
        match errors::parse_id(&raw, "company") {
            Ok(v) => cart = cart.with_company(CompanyId::new(v)),
            Err(resp) => return resp,
        }
    }
    if let Some(raw) = body.client_partner_id {
        match errors::parse_id(&raw, "client partner") {
            Ok(v) => cart = cart.with_client_partner(PartnerId::new(v)),
            Err(resp) => return resp,
        }
    }
    for line in body.lines {
        cart.add_line(line.label, line.quantity, line.unit_price);
    }
    // Reject carts whose total cannot be represented before they are stored.
    if let Err(e) = cart.total() {
        return errors::domain_error_to_response(e);
    }

    match services.carts.save(cart) {
        Ok(saved) => (StatusCode::CREATED, Json(dto::cart_json(&saved))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "cart") {
        Ok(v) => CartId::new(v),
        Err(resp) => return resp,
    };

    match services.carts.find(id) {
        Ok(cart) => (StatusCode::OK, Json(dto::cart_json(&cart))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn empty_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "cart") {
        Ok(v) => CartId::new(v),
        Err(resp) => return resp,
    };

    let cart = match services.carts.find(id) {
        Ok(cart) => cart,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.cart_service.empty_cart(cart) {
        Ok(emptied) => (StatusCode::OK, Json(dto::cart_json(&emptied))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Checkout: create a sale order from the cart, then empty it.
pub async fn validate_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "cart") {
        Ok(v) => CartId::new(v),
        Err(resp) => return resp,
    };

    let cart = match services.carts.find(id) {
        Ok(cart) => cart,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.cart_checkout.create_sale_order_from_cart(&cart) {
        Ok(order) => (StatusCode::CREATED, Json(dto::sale_order_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
