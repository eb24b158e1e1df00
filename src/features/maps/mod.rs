//! Leaflet-ready indicator maps: one circle marker per province, sized and
//! coloured by the selected indicator.

pub mod builder;
pub mod colormap;
pub mod handlers;
pub mod models;
pub mod routes;

pub use builder::build_map;
pub use models::MapSpec;
pub use routes::routes;
