use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use caravel_core::{DomainResult, Entity, EntityId, Specification};

use crate::company::CompanyId;
use crate::currency::CurrencyId;

/// Partner identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerId(pub EntityId);

impl PartnerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PartnerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Reference data: a business partner.
///
/// A partner record can play two roles: a customer (eligible as the client
/// partner of a sale order) or a contact (attachable to an order through its
/// client partner's contact set). The same record never plays both on one
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    id: PartnerId,
    full_name: String,
    is_customer: bool,
    is_contact: bool,
    /// Companies this partner is registered with.
    companies: HashSet<CompanyId>,
    /// Contact partners registered on this partner.
    contacts: HashSet<PartnerId>,
    /// Preferred invoicing currency, if any.
    currency: Option<CurrencyId>,
}

impl Partner {
    pub fn customer(id: PartnerId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            is_customer: true,
            is_contact: false,
            companies: HashSet::new(),
            contacts: HashSet::new(),
            currency: None,
        }
    }

    pub fn contact(id: PartnerId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            is_customer: false,
            is_contact: true,
            companies: HashSet::new(),
            contacts: HashSet::new(),
            currency: None,
        }
    }

    pub fn serving_company(mut self, company: CompanyId) -> Self {
        self.companies.insert(company);
        self
    }

    pub fn with_contact(mut self, contact: PartnerId) -> Self {
        self.contacts.insert(contact);
        self
    }

    pub fn with_currency(mut self, currency: CurrencyId) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn id_typed(&self) -> PartnerId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn is_customer(&self) -> bool {
        self.is_customer
    }

    pub fn is_contact(&self) -> bool {
        self.is_contact
    }

    pub fn currency(&self) -> Option<CurrencyId> {
        self.currency
    }

    /// Whether this partner is registered with the given company.
    pub fn serves(&self, company: CompanyId) -> bool {
        self.companies.contains(&company)
    }

    /// Whether the given partner is in this partner's contact set.
    pub fn allows_contact(&self, contact: PartnerId) -> bool {
        self.contacts.contains(&contact)
    }

    pub fn contacts(&self) -> &HashSet<PartnerId> {
        &self.contacts
    }
}

impl Entity for Partner {
    type Id = PartnerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        0
    }
}

/// Persistence collaborator for partners.
///
/// `matching` answers with the persisted records satisfying a specification:
/// membership is repository-backed, so an unpersisted partner is never
/// eligible even when it would satisfy the predicate.
pub trait PartnerRepository: Send + Sync {
    fn find(&self, id: PartnerId) -> DomainResult<Partner>;
    fn save(&self, partner: Partner) -> DomainResult<Partner>;
    fn all(&self) -> Vec<Partner>;
    fn matching(&self, spec: &dyn Specification<Partner>) -> Vec<Partner>;
}
