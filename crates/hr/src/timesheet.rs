use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use caravel_core::{DomainResult, Entity, EntityId};

use caravel_base::Partner;

/// Timesheet identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetId(pub EntityId);

impl TimesheetId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for TimesheetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The employee a timesheet belongs to, with their contact partner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    contact_partner: Option<Partner>,
}

impl Employee {
    pub fn new(contact_partner: Option<Partner>) -> Self {
        Self { contact_partner }
    }

    pub fn contact_partner(&self) -> Option<&Partner> {
        self.contact_partner.as_ref()
    }
}

/// One worked line of a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetLine {
    pub line_no: u32,
    pub date: Option<NaiveDate>,
    pub project: Option<String>,
    pub duration_minutes: u64,
    /// Display name, recomputed by the save pipeline.
    pub full_name: String,
}

impl TimesheetLine {
    pub fn new(line_no: u32, date: Option<NaiveDate>, project: Option<String>) -> Self {
        Self {
            line_no,
            date,
            project,
            duration_minutes: 0,
            full_name: String::new(),
        }
    }
}

/// A period of worked time for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    id: TimesheetId,
    employee: Option<Employee>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
    lines: Vec<TimesheetLine>,
    /// Sum of line durations in minutes, recomputed by the save pipeline.
    period_total: u64,
    /// Display name, recomputed by the save pipeline.
    full_name: String,
    version: u64,
}

impl Timesheet {
    pub fn new(id: TimesheetId) -> Self {
        Self {
            id,
            employee: None,
            from_date: None,
            to_date: None,
            lines: Vec::new(),
            period_total: 0,
            full_name: String::new(),
            version: 0,
        }
    }

    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employee = Some(employee);
        self
    }

    pub fn with_from_date(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    pub fn with_to_date(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    pub fn id_typed(&self) -> TimesheetId {
        self.id
    }

    pub fn employee(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from_date
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to_date
    }

    pub fn lines(&self) -> &[TimesheetLine] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<TimesheetLine> {
        &mut self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<TimesheetLine>) {
        self.lines = lines;
    }

    pub fn period_total(&self) -> u64 {
        self.period_total
    }

    pub fn set_period_total(&mut self, minutes: u64) {
        self.period_total = minutes;
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, name: String) {
        self.full_name = name;
    }

    /// Bump the persisted version. Called by the persistence collaborator on
    /// a successful save.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Entity for Timesheet {
    type Id = TimesheetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Persistence collaborator for timesheets. Implementations run the hook
/// pipeline inside `save`.
pub trait TimesheetRepository: Send + Sync {
    fn find(&self, id: TimesheetId) -> DomainResult<Timesheet>;
    fn save(&self, timesheet: Timesheet) -> DomainResult<Timesheet>;
}
