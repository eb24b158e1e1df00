//! Chart specs for the dashboard and their Plotly rendering.

pub mod builders;
pub mod models;
pub mod palette;
pub mod plotly;

pub use builders::{
    correlation_heatmap, fies_stacked_bar, gas_comparison, ntp_agri_scatter, ranking_bar,
    trend_line,
};
pub use models::ChartSpec;
pub use plotly::figure;
