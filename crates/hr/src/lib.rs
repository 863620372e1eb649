//! `caravel-hr` — timesheets with display-name computation and persistence
//! hook steps.

pub mod hooks;
pub mod names;
pub mod timesheet;

pub use hooks::{
    timesheet_pipeline, ComputeFullName, ComputeLineNames, ComputePeriodTotal,
    GenerateDefaultLines, TimesheetLineGenerator,
};
pub use names::{compute_line_full_name, compute_timesheet_full_name};
pub use timesheet::{Employee, Timesheet, TimesheetId, TimesheetLine, TimesheetRepository};
