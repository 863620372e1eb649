//! `caravel-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by every module: typed identifiers, the
//! [`Entity`] contract, the domain error model, specification predicates and
//! the persistence hook pipeline. No IO, no framework concerns.

pub mod entity;
pub mod error;
pub mod hook;
pub mod id;
pub mod specification;

pub use entity::{Entity, ExpectedVersion};
pub use error::{DomainError, DomainResult};
pub use hook::{CreateHook, HookPipeline, SaveHook};
pub use id::EntityId;
pub use specification::Specification;
