pub mod dashboard_service;
pub mod page_builder;

pub use dashboard_service::DashboardService;
