use std::collections::HashMap;
use std::sync::RwLock;

use caravel_base::{Partner, PartnerId, PartnerRepository};
use caravel_core::{DomainError, DomainResult, Specification};

/// In-memory partner directory.
#[derive(Debug, Default)]
pub struct InMemoryPartnerRepository {
    inner: RwLock<HashMap<PartnerId, Partner>>,
}

impl InMemoryPartnerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartnerRepository for InMemoryPartnerRepository {
    fn find(&self, id: PartnerId) -> DomainResult<Partner> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::conflict("partner store lock poisoned"))?;
        map.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, partner: Partner) -> DomainResult<Partner> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("partner store lock poisoned"))?;
        map.insert(partner.id_typed(), partner.clone());
        Ok(partner)
    }

    fn all(&self) -> Vec<Partner> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn matching(&self, spec: &dyn Specification<Partner>) -> Vec<Partner> {
        match self.inner.read() {
            Ok(map) => map
                .values()
                .filter(|p| spec.is_satisfied_by(p))
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::EntityId;

    struct Customers;

    impl Specification<Partner> for Customers {
        fn is_satisfied_by(&self, candidate: &Partner) -> bool {
            candidate.is_customer()
        }
    }

    #[test]
    fn matching_filters_persisted_records() {
        let repo = InMemoryPartnerRepository::new();
        let customer = Partner::customer(PartnerId::new(EntityId::new()), "Acme Corp");
        let contact = Partner::contact(PartnerId::new(EntityId::new()), "Jane Doe");
        repo.save(customer.clone()).unwrap();
        repo.save(contact).unwrap();

        let matched = repo.matching(&Customers);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id_typed(), customer.id_typed());
    }
}
