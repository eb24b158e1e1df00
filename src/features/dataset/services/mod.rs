pub mod dataset_service;
pub mod generator;

pub use dataset_service::DatasetService;
