//! Synthetic Sumatera dataset.
//!
//! Two tables are generated once per session: a per-province indicator table
//! and a daily trend series over a trailing window.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/dataset/provinces` | Province indicator table |
//! | GET | `/api/dataset/time-series` | Trend series for selected provinces |

pub mod catalog;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DatasetService;
