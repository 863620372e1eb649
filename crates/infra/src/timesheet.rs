use chrono::Datelike;

use caravel_hr::{Timesheet, TimesheetLine, TimesheetLineGenerator};

/// Default line generator: one empty line per weekday between the
/// timesheet's from/to dates (inclusive).
#[derive(Debug, Default)]
pub struct WeekdayLineGenerator;

impl WeekdayLineGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TimesheetLineGenerator for WeekdayLineGenerator {
    fn default_lines(&self, timesheet: &Timesheet) -> Vec<TimesheetLine> {
        let (Some(from), Some(to)) = (timesheet.from_date(), timesheet.to_date()) else {
            return Vec::new();
        };
        if from > to {
            return Vec::new();
        }

        let mut lines = Vec::new();
        let mut date = from;
        while date <= to {
            if date.weekday().number_from_monday() <= 5 {
                lines.push(TimesheetLine::new(lines.len() as u32 + 1, Some(date), None));
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        lines
    }
}
