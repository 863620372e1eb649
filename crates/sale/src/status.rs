//! Status transition engine and confirmation side effects.

use std::sync::Arc;

use caravel_core::{DomainError, DomainResult};

use crate::config::SaleConfigService;
use crate::order::{SaleOrder, SaleOrderRepository, SaleOrderStatus};

/// Precondition collaborator: an advisory alert per transition, empty = ok.
pub trait SaleOrderCheckService: Send + Sync {
    fn finalize_check_alert(&self, order: &SaleOrder) -> String;
    fn confirm_check_alert(&self, order: &SaleOrder) -> String;
}

/// Transition action: finalize a draft quotation.
pub trait SaleOrderFinalizeService: Send + Sync {
    fn finalize_quotation(&self, order: &mut SaleOrder) -> DomainResult<()>;
}

/// Transition action: confirm an order. A non-empty returned message signals
/// a business failure.
pub trait SaleOrderConfirmService: Send + Sync {
    fn confirm_sale_order(&self, order: &mut SaleOrder) -> DomainResult<String>;
}

/// Loyalty accrual collaborator; credits points from the order amount.
pub trait LoyaltyService: Send + Sync {
    fn increment_points_from_amount(&self, order: &SaleOrder) -> DomainResult<()>;
}

/// Validates and executes status changes.
///
/// The whole transition is one unit of work: the engine persists only after
/// the action collaborator succeeded, so a failing confirm leaves no
/// observable mutation.
pub struct SaleOrderStatusEngine {
    orders: Arc<dyn SaleOrderRepository>,
    checks: Arc<dyn SaleOrderCheckService>,
    finalize: Arc<dyn SaleOrderFinalizeService>,
    confirm: Arc<dyn SaleOrderConfirmService>,
    config: Arc<dyn SaleConfigService>,
    loyalty: Arc<dyn LoyaltyService>,
}

impl SaleOrderStatusEngine {
    pub fn new(
        orders: Arc<dyn SaleOrderRepository>,
        checks: Arc<dyn SaleOrderCheckService>,
        finalize: Arc<dyn SaleOrderFinalizeService>,
        confirm: Arc<dyn SaleOrderConfirmService>,
        config: Arc<dyn SaleConfigService>,
        loyalty: Arc<dyn LoyaltyService>,
    ) -> Self {
        Self {
            orders,
            checks,
            finalize,
            confirm,
            config,
            loyalty,
        }
    }

    pub fn change_sale_order_status(
        &self,
        order: &SaleOrder,
        target: SaleOrderStatus,
    ) -> DomainResult<SaleOrder> {
        match target {
            SaleOrderStatus::FinalizedQuotation => self.finalize_quotation(order),
            SaleOrderStatus::Confirmed => self.set_status_to_confirmed(order),
            SaleOrderStatus::Draft => Err(DomainError::inconsistency(
                "a sale order cannot go back to draft",
            )),
        }
    }

    fn finalize_quotation(&self, order: &SaleOrder) -> DomainResult<SaleOrder> {
        let alert = self.checks.finalize_check_alert(order);
        if !alert.is_empty() {
            return Err(DomainError::Inconsistency(alert));
        }

        let mut order = order.clone();
        self.finalize.finalize_quotation(&mut order)?;
        self.orders.save(order)
    }

    fn set_status_to_confirmed(&self, order: &SaleOrder) -> DomainResult<SaleOrder> {
        let alert = self.checks.confirm_check_alert(order);
        if !alert.is_empty() {
            return Err(DomainError::Inconsistency(alert));
        }

        // Re-find: confirm works on the currently persisted state, not on the
        // caller's snapshot.
        let mut order = self.orders.find(order.id_typed())?;
        let message = self.confirm.confirm_sale_order(&mut order)?;
        if !message.is_empty() {
            return Err(DomainError::Inconsistency(message));
        }

        let saved = self.orders.save(order)?;
        self.dispatch_loyalty(&saved);
        Ok(saved)
    }

    /// Best-effort side effect after a successful confirmation: accrue
    /// loyalty points when the feature is on and the order has a client
    /// partner. A loyalty failure never fails the transition.
    fn dispatch_loyalty(&self, order: &SaleOrder) {
        if !self.config.loyalty_enabled() {
            return;
        }
        if order.client_partner().is_none() {
            return;
        }
        if let Err(e) = self.loyalty.increment_points_from_amount(order) {
            tracing::warn!(order_id = %order.id_typed(), error = %e, "loyalty accrual failed");
        }
    }
}

/// Default precondition alerts: the plain state-machine rules.
pub struct DefaultCheckService;

impl SaleOrderCheckService for DefaultCheckService {
    fn finalize_check_alert(&self, order: &SaleOrder) -> String {
        match order.status() {
            SaleOrderStatus::Draft => String::new(),
            _ => "only a draft quotation can be finalized".to_string(),
        }
    }

    fn confirm_check_alert(&self, order: &SaleOrder) -> String {
        match order.status() {
            SaleOrderStatus::Confirmed => "sale order is already confirmed".to_string(),
            _ => String::new(),
        }
    }
}

/// Default finalize action: the entity's own transition.
pub struct DefaultFinalizeService;

impl SaleOrderFinalizeService for DefaultFinalizeService {
    fn finalize_quotation(&self, order: &mut SaleOrder) -> DomainResult<()> {
        order.mark_finalized()
    }
}

/// Default confirm action: the entity's own transition, with a guard failure
/// reported as the business message rather than a hard error.
pub struct DefaultConfirmService;

impl SaleOrderConfirmService for DefaultConfirmService {
    fn confirm_sale_order(&self, order: &mut SaleOrder) -> DomainResult<String> {
        match order.mark_confirmed() {
            Ok(()) => Ok(String::new()),
            Err(e) => Ok(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::EntityId;

    use crate::order::SaleOrderId;

    fn order() -> SaleOrder {
        SaleOrder::new(SaleOrderId::new(EntityId::new()))
    }

    #[test]
    fn default_checks_pass_on_draft() {
        let order = order();
        assert!(DefaultCheckService.finalize_check_alert(&order).is_empty());
        assert!(DefaultCheckService.confirm_check_alert(&order).is_empty());
    }

    #[test]
    fn default_checks_flag_bad_states() {
        let mut confirmed = order();
        confirmed.mark_confirmed().unwrap();
        assert!(!DefaultCheckService.finalize_check_alert(&confirmed).is_empty());
        assert!(!DefaultCheckService.confirm_check_alert(&confirmed).is_empty());
    }

    #[test]
    fn default_confirm_reports_guard_failure_as_message() {
        let mut confirmed = order();
        confirmed.mark_confirmed().unwrap();
        let message = DefaultConfirmService.confirm_sale_order(&mut confirmed).unwrap();
        assert_eq!(message, "sale order is already confirmed");
    }
}
