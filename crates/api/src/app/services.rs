use std::sync::Arc;

use caravel_infra::{
    InMemoryCartRepository, InMemoryCompanyRepository, InMemoryCurrencyRepository,
    InMemoryLoyaltyLedger, InMemoryPartnerRepository, InMemorySaleOrderRepository,
    InMemorySaleConfigService, InMemoryTimesheetRepository, WeekdayLineGenerator,
};
use caravel_hr::timesheet_pipeline;
use caravel_sale::{
    CartSaleOrderGenerator, CartService, DefaultCheckService, DefaultConfirmService,
    DefaultFinalizeService, DefaultOnChangeService, SaleOrderGenerator, SaleOrderStatusEngine,
};

/// All collaborators behind the HTTP handlers, wired once at startup.
pub struct AppServices {
    pub partners: Arc<InMemoryPartnerRepository>,
    pub companies: Arc<InMemoryCompanyRepository>,
    pub currencies: Arc<InMemoryCurrencyRepository>,
    pub orders: Arc<InMemorySaleOrderRepository>,
    pub carts: Arc<InMemoryCartRepository>,
    pub timesheets: Arc<InMemoryTimesheetRepository>,
    pub config: Arc<InMemorySaleConfigService>,
    pub loyalty: Arc<InMemoryLoyaltyLedger>,
    pub generator: Arc<SaleOrderGenerator>,
    pub engine: Arc<SaleOrderStatusEngine>,
    pub cart_service: Arc<CartService>,
    pub cart_checkout: Arc<CartSaleOrderGenerator>,
}

/// Constructor injection happens here, once: every engine and factory gets
/// its collaborators explicitly, no runtime lookup anywhere.
pub fn build_services() -> AppServices {
    let partners = Arc::new(InMemoryPartnerRepository::new());
    let companies = Arc::new(InMemoryCompanyRepository::new());
    let currencies = Arc::new(InMemoryCurrencyRepository::new());
    let orders = Arc::new(InMemorySaleOrderRepository::new());
    let carts = Arc::new(InMemoryCartRepository::new());
    let config = Arc::new(InMemorySaleConfigService::new());
    let loyalty = Arc::new(InMemoryLoyaltyLedger::new());

    let timesheets = Arc::new(InMemoryTimesheetRepository::new(timesheet_pipeline(
        Arc::new(WeekdayLineGenerator::new()),
    )));

    let on_change = Arc::new(DefaultOnChangeService::new(
        companies.clone(),
        partners.clone(),
        config.clone(),
    ));
    let generator = Arc::new(SaleOrderGenerator::new(
        orders.clone(),
        partners.clone(),
        config.clone(),
        on_change,
    ));
    let engine = Arc::new(SaleOrderStatusEngine::new(
        orders.clone(),
        Arc::new(DefaultCheckService),
        Arc::new(DefaultFinalizeService),
        Arc::new(DefaultConfirmService),
        config.clone(),
        loyalty.clone(),
    ));
    let cart_service = Arc::new(CartService::new(carts.clone()));
    let cart_checkout = Arc::new(CartSaleOrderGenerator::new(
        generator.clone(),
        orders.clone(),
        carts.clone(),
    ));

    AppServices {
        partners,
        companies,
        currencies,
        orders,
        carts,
        timesheets,
        config,
        loyalty,
        generator,
        engine,
        cart_service,
        cart_checkout,
    }
}
