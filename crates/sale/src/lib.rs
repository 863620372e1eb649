//! `caravel-sale` — sale order lifecycle and validation engine.
//!
//! The module covers order creation (factory + on-change defaulting + domain
//! validation), the status transition engine with its confirmation side
//! effects, the per-company sale configuration, and cart checkout.

pub mod cart;
pub mod config;
pub mod domain;
pub mod generator;
pub mod onchange;
pub mod order;
pub mod status;

pub use cart::{Cart, CartId, CartLine, CartRepository, CartSaleOrderGenerator, CartService};
pub use config::{SaleConfig, SaleConfigService, TaxInclusionPolicy};
pub use domain::{check_client_partner, check_contact, EligiblePartner};
pub use generator::SaleOrderGenerator;
pub use onchange::{DefaultOnChangeService, SaleOrderOnChangeService};
pub use order::{SaleOrder, SaleOrderId, SaleOrderRepository, SaleOrderStatus};
pub use status::{
    DefaultCheckService, DefaultConfirmService, DefaultFinalizeService, LoyaltyService,
    SaleOrderCheckService, SaleOrderConfirmService, SaleOrderFinalizeService,
    SaleOrderStatusEngine,
};
