//! Timesheet persistence hook steps.
//!
//! The save lifecycle is an explicit pipeline of named steps registered on
//! the persistence collaborator, replacing a subclassed repository override:
//! every save recomputes line names, the timesheet display name and the
//! period total; the first persistence additionally fills default lines
//! through the external line generator.

use std::sync::Arc;

use caravel_core::{CreateHook, DomainError, DomainResult, HookPipeline, SaveHook};

use crate::names;
use crate::timesheet::{Timesheet, TimesheetLine};

/// Line generation collaborator (internals out of scope here).
pub trait TimesheetLineGenerator: Send + Sync {
    fn default_lines(&self, timesheet: &Timesheet) -> Vec<TimesheetLine>;
}

/// Save step: recompute each line's display name.
pub struct ComputeLineNames;

impl SaveHook<Timesheet> for ComputeLineNames {
    fn name(&self) -> &'static str {
        "timesheet.compute-line-names"
    }

    fn apply(&self, timesheet: &mut Timesheet) -> DomainResult<()> {
        for line in timesheet.lines_mut() {
            line.full_name = names::compute_line_full_name(line);
        }
        Ok(())
    }
}

/// Save step: recompute the timesheet display name.
pub struct ComputeFullName;

impl SaveHook<Timesheet> for ComputeFullName {
    fn name(&self) -> &'static str {
        "timesheet.compute-full-name"
    }

    fn apply(&self, timesheet: &mut Timesheet) -> DomainResult<()> {
        let full_name = names::compute_timesheet_full_name(timesheet);
        timesheet.set_full_name(full_name);
        Ok(())
    }
}

/// Save step: recompute the period total from the line durations.
pub struct ComputePeriodTotal;

impl SaveHook<Timesheet> for ComputePeriodTotal {
    fn name(&self) -> &'static str {
        "timesheet.compute-period-total"
    }

    fn apply(&self, timesheet: &mut Timesheet) -> DomainResult<()> {
        // Durations arrive unbounded from the outside; a sum that does not
        // fit in u64 aborts the save instead of wrapping.
        let total = timesheet
            .lines()
            .iter()
            .try_fold(0u64, |acc, l| acc.checked_add(l.duration_minutes))
            .ok_or_else(|| {
                DomainError::validation("timesheet period total exceeds the representable duration")
            })?;
        timesheet.set_period_total(total);
        Ok(())
    }
}

/// Create step: fill default lines on a fresh, empty timesheet.
pub struct GenerateDefaultLines {
    generator: Arc<dyn TimesheetLineGenerator>,
}

impl GenerateDefaultLines {
    pub fn new(generator: Arc<dyn TimesheetLineGenerator>) -> Self {
        Self { generator }
    }
}

impl CreateHook<Timesheet> for GenerateDefaultLines {
    fn name(&self) -> &'static str {
        "timesheet.generate-default-lines"
    }

    fn apply(&self, timesheet: &mut Timesheet) -> DomainResult<()> {
        if timesheet.lines().is_empty() {
            let lines = self.generator.default_lines(timesheet);
            timesheet.set_lines(lines);
        }
        Ok(())
    }
}

/// The standard timesheet pipeline, in registration order.
pub fn timesheet_pipeline(generator: Arc<dyn TimesheetLineGenerator>) -> HookPipeline<Timesheet> {
    HookPipeline::new()
        .on_create(Arc::new(GenerateDefaultLines::new(generator)))
        .on_save(Arc::new(ComputeLineNames))
        .on_save(Arc::new(ComputeFullName))
        .on_save(Arc::new(ComputePeriodTotal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use caravel_core::EntityId;

    use crate::timesheet::TimesheetId;

    struct TwoLines;

    impl TimesheetLineGenerator for TwoLines {
        fn default_lines(&self, timesheet: &Timesheet) -> Vec<TimesheetLine> {
            let date = timesheet.from_date();
            vec![
                TimesheetLine::new(1, date, Some("Apollo".into())),
                TimesheetLine::new(2, date, Some("Hermes".into())),
            ]
        }
    }

    fn timesheet() -> Timesheet {
        Timesheet::new(TimesheetId::new(EntityId::new()))
            .with_from_date(NaiveDate::from_ymd_opt(2023, 1, 10).unwrap())
    }

    #[test]
    fn create_fills_default_lines_and_save_names_them() {
        let pipeline = timesheet_pipeline(Arc::new(TwoLines));
        let mut ts = timesheet();

        pipeline.run(&mut ts, true).unwrap();

        assert_eq!(ts.lines().len(), 2);
        assert_eq!(ts.lines()[0].full_name, "Apollo 10/01/2023");
        assert_eq!(ts.lines()[1].full_name, "Hermes 10/01/2023");
    }

    #[test]
    fn existing_lines_are_kept_on_create() {
        let pipeline = timesheet_pipeline(Arc::new(TwoLines));
        let mut ts = timesheet();
        ts.lines_mut().push(TimesheetLine::new(1, None, Some("Kept".into())));

        pipeline.run(&mut ts, true).unwrap();

        assert_eq!(ts.lines().len(), 1);
        assert_eq!(ts.lines()[0].full_name, "Kept");
    }

    #[test]
    fn saves_on_existing_records_skip_generation() {
        let pipeline = timesheet_pipeline(Arc::new(TwoLines));
        let mut ts = timesheet();

        pipeline.run(&mut ts, false).unwrap();

        assert!(ts.lines().is_empty());
    }

    proptest::proptest! {
        #[test]
        fn period_total_matches_any_line_set(durations in proptest::collection::vec(0u64..10_000, 0..20)) {
            let pipeline = timesheet_pipeline(Arc::new(TwoLines));
            let mut ts = timesheet();
            let lines = durations
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let mut line = TimesheetLine::new(i as u32 + 1, None, None);
                    line.duration_minutes = *d;
                    line
                })
                .collect();
            ts.set_lines(lines);

            pipeline.run(&mut ts, false).unwrap();

            proptest::prop_assert_eq!(ts.period_total(), durations.iter().sum::<u64>());
        }
    }

    #[test]
    fn overflowing_period_total_aborts_the_save() {
        let pipeline = timesheet_pipeline(Arc::new(TwoLines));
        let mut ts = timesheet();
        let mut a = TimesheetLine::new(1, None, None);
        a.duration_minutes = u64::MAX;
        let mut b = TimesheetLine::new(2, None, None);
        b.duration_minutes = 1;
        ts.set_lines(vec![a, b]);

        let err = pipeline.run(&mut ts, false).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn period_total_sums_line_durations() {
        let pipeline = timesheet_pipeline(Arc::new(TwoLines));
        let mut ts = timesheet();
        let mut a = TimesheetLine::new(1, None, None);
        a.duration_minutes = 90;
        let mut b = TimesheetLine::new(2, None, None);
        b.duration_minutes = 30;
        ts.set_lines(vec![a, b]);

        pipeline.run(&mut ts, false).unwrap();

        assert_eq!(ts.period_total(), 120);
    }
}
