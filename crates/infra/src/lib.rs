//! `caravel-infra` — in-memory implementations of the persistence and
//! configuration collaborators, for dev and tests.
//!
//! Every store is an `RwLock<HashMap>` behind the corresponding trait; saves
//! of versioned entities perform an optimistic version check and bump.

pub mod config;
pub mod loyalty;
pub mod repo;
pub mod timesheet;


pub use config::InMemorySaleConfigService;
pub use loyalty::InMemoryLoyaltyLedger;
pub use repo::{
    InMemoryCartRepository, InMemoryCompanyRepository, InMemoryCurrencyRepository,
    InMemoryPartnerRepository, InMemorySaleOrderRepository, InMemoryTimesheetRepository,
};
pub use timesheet::WeekdayLineGenerator;
