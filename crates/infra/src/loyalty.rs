use std::collections::HashMap;
use std::sync::RwLock;

use caravel_base::PartnerId;
use caravel_core::{DomainError, DomainResult};
use caravel_sale::{LoyaltyService, SaleOrder};

/// Points credited per order: one point per whole currency unit of the total.
const POINTS_DIVISOR: u64 = 100;

/// In-memory loyalty point ledger.
#[derive(Debug, Default)]
pub struct InMemoryLoyaltyLedger {
    points: RwLock<HashMap<PartnerId, u64>>,
}

impl InMemoryLoyaltyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self, partner: PartnerId) -> u64 {
        self.points
            .read()
            .ok()
            .and_then(|map| map.get(&partner).copied())
            .unwrap_or(0)
    }
}

impl LoyaltyService for InMemoryLoyaltyLedger {
    fn increment_points_from_amount(&self, order: &SaleOrder) -> DomainResult<()> {
        let partner = order
            .client_partner()
            .ok_or_else(|| DomainError::inconsistency("order has no client partner"))?;

        let mut map = self
            .points
            .write()
            .map_err(|_| DomainError::conflict("loyalty ledger lock poisoned"))?;
        *map.entry(partner).or_insert(0) += order.total_amount() / POINTS_DIVISOR;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::EntityId;
    use caravel_sale::SaleOrderId;

    #[test]
    fn accrues_one_point_per_whole_unit() {
        let ledger = InMemoryLoyaltyLedger::new();
        let partner = PartnerId::new(EntityId::new());

        let mut order = SaleOrder::new(SaleOrderId::new(EntityId::new()));
        order.set_client_partner(partner);
        order.set_total_amount(2_550);

        ledger.increment_points_from_amount(&order).unwrap();
        assert_eq!(ledger.points(partner), 25);

        ledger.increment_points_from_amount(&order).unwrap();
        assert_eq!(ledger.points(partner), 50);
    }

    #[test]
    fn partnerless_order_is_rejected() {
        let ledger = InMemoryLoyaltyLedger::new();
        let order = SaleOrder::new(SaleOrderId::new(EntityId::new()));
        assert!(ledger.increment_points_from_amount(&order).is_err());
    }
}
