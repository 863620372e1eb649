use std::collections::HashMap;
use std::sync::RwLock;

use caravel_core::{DomainError, DomainResult, Entity, ExpectedVersion, HookPipeline};
use caravel_hr::{Timesheet, TimesheetId, TimesheetRepository};

/// In-memory timesheet store that runs the hook pipeline inside `save`.
///
/// A failing step aborts the save and the store keeps the previous state.
pub struct InMemoryTimesheetRepository {
    inner: RwLock<HashMap<TimesheetId, Timesheet>>,
    pipeline: HookPipeline<Timesheet>,
}

impl InMemoryTimesheetRepository {
    pub fn new(pipeline: HookPipeline<Timesheet>) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            pipeline,
        }
    }
}

impl TimesheetRepository for InMemoryTimesheetRepository {
    fn find(&self, id: TimesheetId) -> DomainResult<Timesheet> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::conflict("timesheet store lock poisoned"))?;
        map.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, mut timesheet: Timesheet) -> DomainResult<Timesheet> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("timesheet store lock poisoned"))?;

        let is_new = !map.contains_key(&timesheet.id_typed());
        if let Some(existing) = map.get(&timesheet.id_typed()) {
            ExpectedVersion::Exact(existing.version()).check(timesheet.version())?;
        }

        self.pipeline.run(&mut timesheet, is_new)?;

        timesheet.bump_version();
        map.insert(timesheet.id_typed(), timesheet.clone());
        Ok(timesheet)
    }
}
