use serde::{Deserialize, Serialize};

use caravel_core::{DomainResult, Entity, EntityId};

use crate::currency::CurrencyId;

/// Company identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub EntityId);

impl CompanyId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Reference data: a company, with its accounting currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    currency: Option<CurrencyId>,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            currency: None,
        }
    }

    pub fn with_currency(mut self, currency: CurrencyId) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn id_typed(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> Option<CurrencyId> {
        self.currency
    }
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        0
    }
}

/// Persistence collaborator for companies.
pub trait CompanyRepository: Send + Sync {
    fn find(&self, id: CompanyId) -> DomainResult<Company>;
    fn save(&self, company: Company) -> DomainResult<Company>;
}
