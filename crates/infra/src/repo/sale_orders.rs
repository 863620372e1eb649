use std::collections::HashMap;
use std::sync::RwLock;

use caravel_core::{DomainError, DomainResult, Entity, ExpectedVersion};
use caravel_sale::{SaleOrder, SaleOrderId, SaleOrderRepository};

/// In-memory sale order store with optimistic concurrency.
#[derive(Debug, Default)]
pub struct InMemorySaleOrderRepository {
    inner: RwLock<HashMap<SaleOrderId, SaleOrder>>,
}

impl InMemorySaleOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaleOrderRepository for InMemorySaleOrderRepository {
    fn find(&self, id: SaleOrderId) -> DomainResult<SaleOrder> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::conflict("sale order store lock poisoned"))?;
        map.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, mut order: SaleOrder) -> DomainResult<SaleOrder> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("sale order store lock poisoned"))?;

        if let Some(existing) = map.get(&order.id_typed()) {
            ExpectedVersion::Exact(existing.version()).check(order.version())?;
        }

        order.bump_version();
        map.insert(order.id_typed(), order.clone());
        Ok(order)
    }

    fn all(&self) -> Vec<SaleOrder> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::EntityId;

    #[test]
    fn save_bumps_the_version() {
        let repo = InMemorySaleOrderRepository::new();
        let order = SaleOrder::new(SaleOrderId::new(EntityId::new()));

        let saved = repo.save(order).unwrap();
        assert_eq!(saved.version(), 1);

        let again = repo.save(saved).unwrap();
        assert_eq!(again.version(), 2);
    }

    #[test]
    fn stale_save_fails_with_conflict() {
        let repo = InMemorySaleOrderRepository::new();
        let order = SaleOrder::new(SaleOrderId::new(EntityId::new()));

        let stale = repo.save(order).unwrap();
        let _current = repo.save(stale.clone()).unwrap();

        let err = repo.save(stale).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn find_misses_with_not_found() {
        let repo = InMemorySaleOrderRepository::new();
        let err = repo.find(SaleOrderId::new(EntityId::new())).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }
}
