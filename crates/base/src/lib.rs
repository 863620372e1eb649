//! `caravel-base` — reference domain shared by the business modules.
//!
//! Partners, companies and currencies are read-only reference data from the
//! sale core's perspective: the sale module reads them through the repository
//! collaborator traits defined next to each entity.

pub mod company;
pub mod currency;
pub mod partner;

pub use company::{Company, CompanyId, CompanyRepository};
pub use currency::{Currency, CurrencyId, CurrencyRepository};
pub use partner::{Partner, PartnerId, PartnerRepository};
