use axum::Router;

pub mod app_config;
pub mod carts;
pub mod companies;
pub mod currencies;
pub mod partners;
pub mod sale_orders;
pub mod system;
pub mod timesheets;

/// Router for all business endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/partners", partners::router())
        .nest("/currencies", currencies::router())
        .nest("/companies", companies::router())
        .nest("/sale-orders", sale_orders::router())
        .nest("/carts", carts::router())
        .nest("/timesheets", timesheets::router())
        .merge(app_config::router())
}
