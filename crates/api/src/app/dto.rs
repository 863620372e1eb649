use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use caravel_base::{Company, Currency, Partner};
use caravel_hr::Timesheet;
use caravel_sale::{Cart, SaleOrder, SaleOrderStatus, TaxInclusionPolicy};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreatePartnerRequest {
    pub full_name: String,
    /// "customer" or "contact".
    pub kind: String,
    pub company_ids: Option<Vec<String>>,
    pub contact_ids: Option<Vec<String>>,
    pub currency_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCurrencyRequest {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub currency_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaleConfigRequest {
    /// One of: wt_default, ati_default, wt_always, ati_always.
    pub tax_inclusion: String,
}

#[derive(Debug, Deserialize)]
pub struct AppConfigRequest {
    pub loyalty_enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateSaleOrderRequest {
    pub client_partner_id: String,
    pub company_id: Option<String>,
    pub contact_partner_id: Option<String>,
    pub currency_id: Option<String>,
    pub in_ati: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub sale_order_id: String,
    /// Target status: "finalized_quotation" or "confirmed".
    pub status: SaleOrderStatus,
}

#[derive(Debug, Deserialize)]
pub struct CartLineRequest {
    pub label: String,
    pub quantity: u64,
    pub unit_price: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCartRequest {
    pub company_id: Option<String>,
    pub client_partner_id: Option<String>,
    #[serde(default)]
    pub lines: Vec<CartLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct TimesheetLineRequest {
    pub date: Option<NaiveDate>,
    pub project: Option<String>,
    #[serde(default)]
    pub duration_minutes: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateTimesheetRequest {
    /// Contact partner of the employee the timesheet belongs to.
    pub employee_contact_name: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub lines: Vec<TimesheetLineRequest>,
}

pub fn parse_tax_inclusion(s: &str) -> Result<TaxInclusionPolicy, axum::response::Response> {
    match s {
        "wt_default" => Ok(TaxInclusionPolicy::WtDefault),
        "ati_default" => Ok(TaxInclusionPolicy::AtiDefault),
        "wt_always" => Ok(TaxInclusionPolicy::WtAlways),
        "ati_always" => Ok(TaxInclusionPolicy::AtiAlways),
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_tax_inclusion",
            "tax_inclusion must be one of: wt_default, ati_default, wt_always, ati_always",
        )),
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn sale_order_json(order: &SaleOrder) -> serde_json::Value {
    json!({
        "id": order.id_typed().to_string(),
        "status": order.status(),
        "company_id": order.company().map(|c| c.to_string()),
        "client_partner_id": order.client_partner().map(|p| p.to_string()),
        "contact_partner_id": order.contact_partner().map(|p| p.to_string()),
        "currency_id": order.currency().map(|c| c.to_string()),
        "in_ati": order.in_ati(),
        "total_amount": order.total_amount(),
        "created_at": order.created_at(),
    })
}

pub fn partner_json(partner: &Partner) -> serde_json::Value {
    json!({
        "id": partner.id_typed().to_string(),
        "full_name": partner.full_name(),
        "is_customer": partner.is_customer(),
        "is_contact": partner.is_contact(),
        "currency_id": partner.currency().map(|c| c.to_string()),
    })
}

pub fn company_json(company: &Company) -> serde_json::Value {
    json!({
        "id": company.id_typed().to_string(),
        "name": company.name(),
        "currency_id": company.currency().map(|c| c.to_string()),
    })
}

pub fn currency_json(currency: &Currency) -> serde_json::Value {
    json!({
        "id": currency.id_typed().to_string(),
        "code": currency.code(),
        "name": currency.name(),
    })
}

pub fn cart_json(cart: &Cart) -> serde_json::Value {
    json!({
        "id": cart.id_typed().to_string(),
        "company_id": cart.company().map(|c| c.to_string()),
        "client_partner_id": cart.client_partner().map(|p| p.to_string()),
        "lines": cart.lines().iter().map(|l| json!({
            "line_no": l.line_no,
            "label": l.label,
            "quantity": l.quantity,
            "unit_price": l.unit_price,
        })).collect::<Vec<_>>(),
        "total": cart.total().ok(),
    })
}

pub fn timesheet_json(timesheet: &Timesheet) -> serde_json::Value {
    json!({
        "id": timesheet.id_typed().to_string(),
        "full_name": timesheet.full_name(),
        "from_date": timesheet.from_date(),
        "to_date": timesheet.to_date(),
        "period_total": timesheet.period_total(),
        "lines": timesheet.lines().iter().map(|l| json!({
            "line_no": l.line_no,
            "date": l.date,
            "project": l.project,
            "duration_minutes": l.duration_minutes,
            "full_name": l.full_name,
        })).collect::<Vec<_>>(),
    })
}
