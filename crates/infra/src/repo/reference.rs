use std::collections::HashMap;
use std::sync::RwLock;

use caravel_base::{
    Company, CompanyId, CompanyRepository, Currency, CurrencyId, CurrencyRepository,
};
use caravel_core::{DomainError, DomainResult};

/// In-memory company store.
#[derive(Debug, Default)]
pub struct InMemoryCompanyRepository {
    inner: RwLock<HashMap<CompanyId, Company>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    fn find(&self, id: CompanyId) -> DomainResult<Company> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::conflict("company store lock poisoned"))?;
        map.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, company: Company) -> DomainResult<Company> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("company store lock poisoned"))?;
        map.insert(company.id_typed(), company.clone());
        Ok(company)
    }
}

/// In-memory currency store.
#[derive(Debug, Default)]
pub struct InMemoryCurrencyRepository {
    inner: RwLock<HashMap<CurrencyId, Currency>>,
}

impl InMemoryCurrencyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CurrencyRepository for InMemoryCurrencyRepository {
    fn find(&self, id: CurrencyId) -> DomainResult<Currency> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::conflict("currency store lock poisoned"))?;
        map.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, currency: Currency) -> DomainResult<Currency> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("currency store lock poisoned"))?;
        map.insert(currency.id_typed(), currency.clone());
        Ok(currency)
    }
}
