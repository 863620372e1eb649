//! In-memory repositories for dev and tests.

mod carts;
mod partners;
mod reference;
mod sale_orders;
mod timesheets;

pub use carts::InMemoryCartRepository;
pub use partners::InMemoryPartnerRepository;
pub use reference::{InMemoryCompanyRepository, InMemoryCurrencyRepository};
pub use sale_orders::InMemorySaleOrderRepository;
pub use timesheets::InMemoryTimesheetRepository;
