//! Cart and checkout: turning a cart into a persisted sale order.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use caravel_core::{DomainError, DomainResult, Entity, EntityId};

use caravel_base::{CompanyId, PartnerId};

use crate::generator::SaleOrderGenerator;
use crate::order::{SaleOrder, SaleOrderRepository};

/// Cart identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(pub EntityId);

impl CartId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Cart line: label + price snapshot (the product catalog lives elsewhere).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub line_no: u32,
    pub label: String,
    pub quantity: u64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

/// A shopping cart for one client partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    company: Option<CompanyId>,
    client_partner: Option<PartnerId>,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            company: None,
            client_partner: None,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn with_company(mut self, company: CompanyId) -> Self {
        self.company = Some(company);
        self
    }

    pub fn with_client_partner(mut self, partner: PartnerId) -> Self {
        self.client_partner = Some(partner);
        self
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn company(&self) -> Option<CompanyId> {
        self.company
    }

    pub fn client_partner(&self) -> Option<PartnerId> {
        self.client_partner
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn add_line(&mut self, label: impl Into<String>, quantity: u64, unit_price: u64) {
        let line_no = self.lines.len() as u32 + 1;
        self.lines.push(CartLine {
            line_no,
            label: label.into(),
            quantity,
            unit_price,
        });
    }

    /// Sum of `quantity * unit_price` over all lines.
    ///
    /// Line values arrive unbounded from the outside, so the arithmetic is
    /// checked: a total that does not fit in `u64` is a validation error,
    /// never a wrapped amount.
    pub fn total(&self) -> DomainResult<u64> {
        self.lines.iter().try_fold(0u64, |acc, l| {
            l.quantity
                .checked_mul(l.unit_price)
                .and_then(|amount| acc.checked_add(amount))
                .ok_or_else(|| DomainError::validation("cart total exceeds the representable amount"))
        })
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// Bump the persisted version. Called by the persistence collaborator on
    /// a successful save.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Persistence collaborator for carts.
pub trait CartRepository: Send + Sync {
    fn find(&self, id: CartId) -> DomainResult<Cart>;
    fn save(&self, cart: Cart) -> DomainResult<Cart>;
}

/// Cart maintenance operations.
pub struct CartService {
    carts: Arc<dyn CartRepository>,
}

impl CartService {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub fn empty_cart(&self, mut cart: Cart) -> DomainResult<Cart> {
        cart.clear_lines();
        self.carts.save(cart)
    }
}

/// Checkout: one composite operation building a sale order from a cart.
pub struct CartSaleOrderGenerator {
    generator: Arc<SaleOrderGenerator>,
    orders: Arc<dyn SaleOrderRepository>,
    carts: Arc<dyn CartRepository>,
}

impl CartSaleOrderGenerator {
    pub fn new(
        generator: Arc<SaleOrderGenerator>,
        orders: Arc<dyn SaleOrderRepository>,
        carts: Arc<dyn CartRepository>,
    ) -> Self {
        Self {
            generator,
            orders,
            carts,
        }
    }

    /// Create a sale order from the cart, copy the cart total onto it, then
    /// empty the cart. A partner-less or unrepresentable cart fails before
    /// anything is stored.
    pub fn create_sale_order_from_cart(&self, cart: &Cart) -> DomainResult<SaleOrder> {
        let client_partner = cart
            .client_partner()
            .ok_or_else(|| DomainError::inconsistency("cart has no client partner"))?;
        let total = cart.total()?;

        let mut order =
            self.generator
                .create_sale_order(client_partner, cart.company(), None, None, None)?;
        order.set_total_amount(total);
        let order = self.orders.save(order)?;

        let mut emptied = self.carts.find(cart.id_typed())?;
        emptied.clear_lines();
        self.carts.save(emptied)?;

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cart() -> Cart {
        Cart::new(CartId::new(EntityId::new()))
    }

    #[test]
    fn total_sums_quantity_times_price() {
        let mut cart = cart();
        cart.add_line("Widget", 2, 500);
        cart.add_line("Gadget", 1, 250);
        assert_eq!(cart.total().unwrap(), 1250);
    }

    #[test]
    fn overflowing_total_is_a_validation_error() {
        let mut cart = cart();
        cart.add_line("Bulk", u64::MAX, 2);
        assert!(matches!(cart.total(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn overflowing_sum_of_lines_is_a_validation_error() {
        let mut cart = cart();
        cart.add_line("A", 1, u64::MAX);
        cart.add_line("B", 1, 1);
        assert!(matches!(cart.total(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn line_numbers_are_sequential() {
        let mut cart = cart();
        cart.add_line("A", 1, 1);
        cart.add_line("B", 1, 1);
        let nos: Vec<u32> = cart.lines().iter().map(|l| l.line_no).collect();
        assert_eq!(nos, vec![1, 2]);
    }

    #[test]
    fn clearing_lines_zeroes_the_total() {
        let mut cart = cart();
        cart.add_line("Widget", 2, 500);
        cart.clear_lines();
        assert!(cart.lines().is_empty());
        assert_eq!(cart.total().unwrap(), 0);
    }

    proptest! {
        #[test]
        fn total_is_order_of_lines_independent(
            lines in proptest::collection::vec((1u64..100, 1u64..10_000), 0..10)
        ) {
            let mut forward = cart();
            for (q, p) in &lines {
                forward.add_line("line", *q, *p);
            }
            let mut backward = cart();
            for (q, p) in lines.iter().rev() {
                backward.add_line("line", *q, *p);
            }
            prop_assert_eq!(forward.total().unwrap(), backward.total().unwrap());
        }
    }
}
