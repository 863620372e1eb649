use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use caravel_base::CompanyId;
use caravel_sale::{SaleConfig, SaleConfigService, TaxInclusionPolicy};

/// In-memory configuration collaborator.
///
/// Companies without a stored entry answer with the default policy
/// (`WtDefault`, unlocked). The loyalty flag is system-wide.
#[derive(Debug, Default)]
pub struct InMemorySaleConfigService {
    policies: RwLock<HashMap<CompanyId, TaxInclusionPolicy>>,
    loyalty: AtomicBool,
}

impl InMemorySaleConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_policy(&self, company: CompanyId, policy: TaxInclusionPolicy) {
        if let Ok(mut map) = self.policies.write() {
            map.insert(company, policy);
        }
    }

    pub fn set_loyalty_enabled(&self, enabled: bool) {
        self.loyalty.store(enabled, Ordering::Relaxed);
    }
}

impl SaleConfigService for InMemorySaleConfigService {
    fn sale_config(&self, company: CompanyId) -> SaleConfig {
        let policy = self
            .policies
            .read()
            .ok()
            .and_then(|map| map.get(&company).copied())
            .unwrap_or_default();
        SaleConfig::new(company, policy)
    }

    fn loyalty_enabled(&self) -> bool {
        self.loyalty.load(Ordering::Relaxed)
    }
}
