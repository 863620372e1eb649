//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The first four variants are business-rule inconsistencies: they carry a
/// caller-facing message and are always surfaced, never recovered locally.
/// The remaining variants cover the ambient concerns (input validation,
/// lookups, optimistic concurrency) of the persistence collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A business rule was violated; the message is the advisory alert.
    #[error("{0}")]
    Inconsistency(String),

    /// The client partner is outside the company-scoped eligible set.
    #[error("client partner is not in the authorized domain of company {company}")]
    PartnerNotInDomain { company: String },

    /// The contact partner is not registered on the client partner.
    #[error("contact partner is not among the client partner's contacts")]
    ContactNotAllowed,

    /// The tax-inclusion flag was overridden while company policy locks it.
    #[error("ATI change not allowed")]
    AtiChangeNotAllowed,

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. stale version on save).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn inconsistency(msg: impl Into<String>) -> Self {
        Self::Inconsistency(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether this error belongs to the business-rule family.
    ///
    /// The REST layer maps this family to one response class; the ambient
    /// variants keep their own statuses.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::Inconsistency(_)
                | Self::PartnerNotInDomain { .. }
                | Self::ContactNotAllowed
                | Self::AtiChangeNotAllowed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_rule_family_is_classified() {
        assert!(DomainError::inconsistency("total is missing").is_business_rule());
        assert!(DomainError::PartnerNotInDomain { company: "C1".into() }.is_business_rule());
        assert!(DomainError::ContactNotAllowed.is_business_rule());
        assert!(DomainError::AtiChangeNotAllowed.is_business_rule());

        assert!(!DomainError::not_found().is_business_rule());
        assert!(!DomainError::validation("bad input").is_business_rule());
        assert!(!DomainError::conflict("stale version").is_business_rule());
    }

    #[test]
    fn ati_message_matches_the_advisory_text() {
        assert_eq!(DomainError::AtiChangeNotAllowed.to_string(), "ATI change not allowed");
    }
}
