use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use caravel_base::{Partner, PartnerId};
use caravel_hr::{Employee, Timesheet, TimesheetId, TimesheetLine, TimesheetRepository};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_timesheet))
        .route("/:id", get(get_timesheet))
}

pub async fn create_timesheet(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateTimesheetRequest>,
) -> axum::response::Response {
    let mut timesheet = Timesheet::new(TimesheetId::new(caravel_core::EntityId::new()));

    if let Some(name) = body.employee_contact_name {
        let contact = Partner::contact(PartnerId::new(caravel_core::EntityId::new()), name);
        timesheet = timesheet.with_employee(Employee::new(Some(contact)));
    }
    if let Some(from) = body.from_date {
        timesheet = timesheet.with_from_date(from);
    }
    if let Some(to) = body.to_date {
        timesheet = timesheet.with_to_date(to);
    }

    let lines = body
        .lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let mut line = TimesheetLine::new(i as u32 + 1, l.date, l.project.clone());
            line.duration_minutes = l.duration_minutes;
            line
        })
        .collect::<Vec<_>>();
    timesheet.set_lines(lines);

    match services.timesheets.save(timesheet) {
        Ok(saved) => (StatusCode::CREATED, Json(dto::timesheet_json(&saved))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_timesheet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id, "timesheet") {
        Ok(v) => TimesheetId::new(v),
        Err(resp) => return resp,
    };

    match services.timesheets.find(id) {
        Ok(timesheet) => (StatusCode::OK, Json(dto::timesheet_json(&timesheet))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
