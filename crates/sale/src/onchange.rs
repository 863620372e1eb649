//! On-change defaulting: recompute dependent fields when a triggering field
//! is set. Pure mutation of the order based on its current field values.

use std::sync::Arc;

use caravel_base::{CompanyRepository, PartnerRepository};

use crate::config::SaleConfigService;
use crate::order::SaleOrder;

/// Defaulting collaborator invoked by the factory after attaching a company
/// or a client partner.
pub trait SaleOrderOnChangeService: Send + Sync {
    fn company_changed(&self, order: &mut SaleOrder);
    fn partner_changed(&self, order: &mut SaleOrder);
}

/// Standard defaulting rules.
pub struct DefaultOnChangeService {
    companies: Arc<dyn CompanyRepository>,
    partners: Arc<dyn PartnerRepository>,
    config: Arc<dyn SaleConfigService>,
}

impl DefaultOnChangeService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        partners: Arc<dyn PartnerRepository>,
        config: Arc<dyn SaleConfigService>,
    ) -> Self {
        Self {
            companies,
            partners,
            config,
        }
    }
}

impl SaleOrderOnChangeService for DefaultOnChangeService {
    /// Company attached: the currency defaults to the company currency and
    /// the tax-inclusion flag defaults from the company sale configuration.
    fn company_changed(&self, order: &mut SaleOrder) {
        let Some(company_id) = order.company() else {
            return;
        };

        if let Ok(company) = self.companies.find(company_id) {
            if order.currency().is_none() {
                order.set_currency(company.currency());
            }
        }

        let config = self.config.sale_config(company_id);
        order.set_in_ati(config.tax_inclusion.default_in_ati());
    }

    /// Client partner attached: the partner's preferred currency wins when
    /// present, and any previously chosen contact is cleared as stale.
    fn partner_changed(&self, order: &mut SaleOrder) {
        order.set_contact_partner(None);

        let Some(partner_id) = order.client_partner() else {
            return;
        };

        if let Ok(partner) = self.partners.find(partner_id) {
            if let Some(currency) = partner.currency() {
                order.set_currency(Some(currency));
            }
        }
    }
}
