//! Menu dispatcher and page composition.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | HTML dashboard for the query selection |
//! | GET | `/api/dashboard/view` | Composed page as JSON |
//! | GET | `/api/dashboard/menu` | Sidebar options |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DashboardService;
