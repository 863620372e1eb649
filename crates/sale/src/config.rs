use serde::{Deserialize, Serialize};

use caravel_base::CompanyId;

/// Per-company tax-inclusion policy for sale orders.
///
/// The `*Default` policies pick the initial flag but let callers override it;
/// the `*Always` policies lock the flag entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxInclusionPolicy {
    WtDefault,
    AtiDefault,
    WtAlways,
    AtiAlways,
}

impl TaxInclusionPolicy {
    /// Whether the policy forbids overriding the tax-inclusion flag.
    pub fn is_locked(self) -> bool {
        matches!(self, Self::WtAlways | Self::AtiAlways)
    }

    /// Initial tax-inclusion flag under this policy.
    pub fn default_in_ati(self) -> bool {
        matches!(self, Self::AtiDefault | Self::AtiAlways)
    }
}

impl Default for TaxInclusionPolicy {
    fn default() -> Self {
        Self::WtDefault
    }
}

/// Per-company sale configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleConfig {
    pub company: CompanyId,
    pub tax_inclusion: TaxInclusionPolicy,
}

impl SaleConfig {
    pub fn new(company: CompanyId, tax_inclusion: TaxInclusionPolicy) -> Self {
        Self {
            company,
            tax_inclusion,
        }
    }
}

/// Configuration collaborator.
///
/// A company with no stored configuration answers with the default policy
/// (`WtDefault`, unlocked) rather than failing order creation.
pub trait SaleConfigService: Send + Sync {
    fn sale_config(&self, company: CompanyId) -> SaleConfig;

    /// System-wide loyalty feature flag.
    fn loyalty_enabled(&self) -> bool;
}
