mod portfolio_read_service;

pub use portfolio_read_service::PortfolioReadService;
