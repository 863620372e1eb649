use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caravel_core::{DomainError, DomainResult, Entity, EntityId};

use caravel_base::{CompanyId, CurrencyId, PartnerId};

/// Sale order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleOrderId(pub EntityId);

impl SaleOrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SaleOrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Sale order status lifecycle.
///
/// Transitions are monotonic: the entity only exposes forward movement,
/// there is no way back to an earlier status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleOrderStatus {
    Draft,
    FinalizedQuotation,
    Confirmed,
}

/// A customer order progressing through Draft, FinalizedQuotation, Confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    id: SaleOrderId,
    company: Option<CompanyId>,
    client_partner: Option<PartnerId>,
    contact_partner: Option<PartnerId>,
    currency: Option<CurrencyId>,
    /// Whether order amounts are tax-inclusive.
    in_ati: bool,
    template: bool,
    status: SaleOrderStatus,
    /// Total in smallest currency unit (e.g., cents).
    total_amount: u64,
    created_at: DateTime<Utc>,
    version: u64,
}

impl SaleOrder {
    /// Fresh order with framework defaults: Draft, not a template, no
    /// references attached yet.
    pub fn new(id: SaleOrderId) -> Self {
        Self {
            id,
            company: None,
            client_partner: None,
            contact_partner: None,
            currency: None,
            in_ati: false,
            template: false,
            status: SaleOrderStatus::Draft,
            total_amount: 0,
            created_at: Utc::now(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> SaleOrderId {
        self.id
    }

    pub fn company(&self) -> Option<CompanyId> {
        self.company
    }

    pub fn client_partner(&self) -> Option<PartnerId> {
        self.client_partner
    }

    pub fn contact_partner(&self) -> Option<PartnerId> {
        self.contact_partner
    }

    pub fn currency(&self) -> Option<CurrencyId> {
        self.currency
    }

    pub fn in_ati(&self) -> bool {
        self.in_ati
    }

    pub fn is_template(&self) -> bool {
        self.template
    }

    pub fn status(&self) -> SaleOrderStatus {
        self.status
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_company(&mut self, company: CompanyId) {
        self.company = Some(company);
    }

    pub fn set_client_partner(&mut self, partner: PartnerId) {
        self.client_partner = Some(partner);
    }

    pub fn set_contact_partner(&mut self, contact: Option<PartnerId>) {
        self.contact_partner = contact;
    }

    pub fn set_currency(&mut self, currency: Option<CurrencyId>) {
        self.currency = currency;
    }

    pub fn set_in_ati(&mut self, in_ati: bool) {
        self.in_ati = in_ati;
    }

    pub fn set_total_amount(&mut self, total: u64) {
        self.total_amount = total;
    }

    /// Move a draft quotation to FinalizedQuotation.
    pub fn mark_finalized(&mut self) -> DomainResult<()> {
        match self.status {
            SaleOrderStatus::Draft => {
                self.status = SaleOrderStatus::FinalizedQuotation;
                Ok(())
            }
            _ => Err(DomainError::inconsistency(
                "only a draft quotation can be finalized",
            )),
        }
    }

    /// Confirm the order. Confirming straight from Draft is allowed.
    pub fn mark_confirmed(&mut self) -> DomainResult<()> {
        match self.status {
            SaleOrderStatus::Draft | SaleOrderStatus::FinalizedQuotation => {
                self.status = SaleOrderStatus::Confirmed;
                Ok(())
            }
            SaleOrderStatus::Confirmed => {
                Err(DomainError::inconsistency("sale order is already confirmed"))
            }
        }
    }

    /// Bump the persisted version. Called by the persistence collaborator on
    /// a successful save, never by business code.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Entity for SaleOrder {
    type Id = SaleOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Persistence collaborator for sale orders.
pub trait SaleOrderRepository: Send + Sync {
    fn find(&self, id: SaleOrderId) -> DomainResult<SaleOrder>;
    fn save(&self, order: SaleOrder) -> DomainResult<SaleOrder>;
    fn all(&self) -> Vec<SaleOrder>;
}
