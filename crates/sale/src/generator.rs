//! Sale order factory.

use std::sync::Arc;

use caravel_core::{DomainError, DomainResult, EntityId};

use caravel_base::{CompanyId, CurrencyId, PartnerId, PartnerRepository};

use crate::config::SaleConfigService;
use crate::domain;
use crate::onchange::SaleOrderOnChangeService;
use crate::order::{SaleOrder, SaleOrderId, SaleOrderRepository};

/// Constructs new sale orders: defaults, on-change recomputation, domain
/// validation, one save at the end.
///
/// All collaborators are constructor-injected; any validation failure aborts
/// before the single persistence point, so no partial order is ever stored.
pub struct SaleOrderGenerator {
    orders: Arc<dyn SaleOrderRepository>,
    partners: Arc<dyn PartnerRepository>,
    config: Arc<dyn SaleConfigService>,
    on_change: Arc<dyn SaleOrderOnChangeService>,
}

impl SaleOrderGenerator {
    pub fn new(
        orders: Arc<dyn SaleOrderRepository>,
        partners: Arc<dyn PartnerRepository>,
        config: Arc<dyn SaleConfigService>,
        on_change: Arc<dyn SaleOrderOnChangeService>,
    ) -> Self {
        Self {
            orders,
            partners,
            config,
            on_change,
        }
    }

    pub fn create_sale_order(
        &self,
        client_partner: PartnerId,
        company: Option<CompanyId>,
        contact_partner: Option<PartnerId>,
        currency: Option<CurrencyId>,
        in_ati: Option<bool>,
    ) -> DomainResult<SaleOrder> {
        let mut order = SaleOrder::new(SaleOrderId::new(EntityId::new()));

        if let Some(company) = company {
            order.set_company(company);
            self.on_change.company_changed(&mut order);
        }

        domain::check_client_partner(self.partners.as_ref(), client_partner, &order)?;
        order.set_client_partner(client_partner);
        self.on_change.partner_changed(&mut order);

        if let Some(contact) = contact_partner {
            let client = self.partners.find(client_partner)?;
            domain::check_contact(&client, contact)?;
            order.set_contact_partner(Some(contact));
        }

        if let Some(currency) = currency {
            order.set_currency(Some(currency));
        }

        self.set_in_ati(in_ati, &mut order)?;

        self.orders.save(order)
    }

    fn set_in_ati(&self, in_ati: Option<bool>, order: &mut SaleOrder) -> DomainResult<()> {
        let Some(in_ati) = in_ati else {
            return Ok(());
        };
        self.check_in_ati(order)?;
        order.set_in_ati(in_ati);
        Ok(())
    }

    /// Overriding the flag is forbidden when the company policy locks it.
    /// Without a company there is no policy to violate.
    fn check_in_ati(&self, order: &SaleOrder) -> DomainResult<()> {
        let Some(company) = order.company() else {
            return Ok(());
        };
        let config = self.config.sale_config(company);
        if config.tax_inclusion.is_locked() {
            return Err(DomainError::AtiChangeNotAllowed);
        }
        Ok(())
    }
}
