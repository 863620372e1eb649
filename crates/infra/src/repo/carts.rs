use std::collections::HashMap;
use std::sync::RwLock;

use caravel_core::{DomainError, DomainResult, Entity, ExpectedVersion};
use caravel_sale::{Cart, CartId, CartRepository};

/// In-memory cart store with optimistic concurrency.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    inner: RwLock<HashMap<CartId, Cart>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartRepository for InMemoryCartRepository {
    fn find(&self, id: CartId) -> DomainResult<Cart> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::conflict("cart store lock poisoned"))?;
        map.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, mut cart: Cart) -> DomainResult<Cart> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("cart store lock poisoned"))?;

        if let Some(existing) = map.get(&cart.id_typed()) {
            ExpectedVersion::Exact(existing.version()).check(cart.version())?;
        }

        cart.bump_version();
        map.insert(cart.id_typed(), cart.clone());
        Ok(cart)
    }
}
