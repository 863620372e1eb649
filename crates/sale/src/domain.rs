//! Domain validators: company-scoped partner/contact eligibility.
//!
//! The eligibility rule is a [`Specification`] bound ahead of time to the
//! order's company, evaluated against the persisted partner records. This
//! keeps the original company-scoping semantics without interpreting a filter
//! expression at runtime.

use caravel_core::{DomainError, DomainResult, Specification};

use caravel_base::{CompanyId, Partner, PartnerId, PartnerRepository};

use crate::order::SaleOrder;

/// Which partners may be attached as the client partner of an order.
///
/// Satisfied iff the partner is a customer, is not itself a contact record,
/// and — when a company is bound — is registered with that company. Without a
/// company the company clause is dropped.
#[derive(Debug, Clone, Copy)]
pub struct EligiblePartner {
    company: Option<CompanyId>,
}

impl EligiblePartner {
    pub fn for_company(company: Option<CompanyId>) -> Self {
        Self { company }
    }

    pub fn for_order(order: &SaleOrder) -> Self {
        Self::for_company(order.company())
    }
}

impl Specification<Partner> for EligiblePartner {
    fn is_satisfied_by(&self, candidate: &Partner) -> bool {
        if !candidate.is_customer() || candidate.is_contact() {
            return false;
        }
        match self.company {
            Some(company) => candidate.serves(company),
            None => true,
        }
    }
}

/// Fail when the client partner is outside the company-scoped eligible set.
///
/// Membership is repository-backed: an unpersisted partner fails even if it
/// would satisfy the predicate.
pub fn check_client_partner(
    partners: &dyn PartnerRepository,
    client_partner: PartnerId,
    order: &SaleOrder,
) -> DomainResult<()> {
    let spec = EligiblePartner::for_order(order);
    let eligible = partners.matching(&spec);
    if eligible.iter().any(|p| p.id_typed() == client_partner) {
        Ok(())
    } else {
        Err(DomainError::PartnerNotInDomain {
            company: order
                .company()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "any".to_string()),
        })
    }
}

/// Fail when the contact is not in the client partner's contact set.
pub fn check_contact(client_partner: &Partner, contact_partner: PartnerId) -> DomainResult<()> {
    if client_partner.allows_contact(contact_partner) {
        Ok(())
    } else {
        Err(DomainError::ContactNotAllowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::EntityId;

    use crate::order::SaleOrderId;

    fn pid() -> PartnerId {
        PartnerId::new(EntityId::new())
    }

    #[test]
    fn company_bound_spec_requires_registration() {
        let company = CompanyId::new(EntityId::new());
        let registered = Partner::customer(pid(), "Acme Corp").serving_company(company);
        let stranger = Partner::customer(pid(), "Globex");

        let spec = EligiblePartner::for_company(Some(company));
        assert!(spec.is_satisfied_by(&registered));
        assert!(!spec.is_satisfied_by(&stranger));
    }

    #[test]
    fn unbound_spec_drops_the_company_clause() {
        let stranger = Partner::customer(pid(), "Globex");
        let spec = EligiblePartner::for_company(None);
        assert!(spec.is_satisfied_by(&stranger));
    }

    #[test]
    fn contacts_and_non_customers_are_never_eligible() {
        let spec = EligiblePartner::for_company(None);
        assert!(!spec.is_satisfied_by(&Partner::contact(pid(), "Jane Doe")));
    }

    #[test]
    fn contact_check_uses_the_registered_set() {
        let contact = pid();
        let client = Partner::customer(pid(), "Acme Corp").with_contact(contact);

        assert!(check_contact(&client, contact).is_ok());
        let err = check_contact(&client, pid()).unwrap_err();
        assert_eq!(err, DomainError::ContactNotAllowed);
    }

    #[test]
    fn order_without_company_binds_no_company() {
        let order = SaleOrder::new(SaleOrderId::new(EntityId::new()));
        let spec = EligiblePartner::for_order(&order);
        assert!(spec.is_satisfied_by(&Partner::customer(pid(), "Acme Corp")));
    }
}
