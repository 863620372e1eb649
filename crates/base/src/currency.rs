use serde::{Deserialize, Serialize};

use caravel_core::{DomainResult, Entity, EntityId};

/// Currency identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyId(pub EntityId);

impl CurrencyId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Reference data: a currency (ISO code + display name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    id: CurrencyId,
    code: String,
    name: String,
}

impl Currency {
    pub fn new(id: CurrencyId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn id_typed(&self) -> CurrencyId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Currency {
    type Id = CurrencyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        0
    }
}

/// Persistence collaborator for currencies.
pub trait CurrencyRepository: Send + Sync {
    fn find(&self, id: CurrencyId) -> DomainResult<Currency>;
    fn save(&self, currency: Currency) -> DomainResult<Currency>;
}
