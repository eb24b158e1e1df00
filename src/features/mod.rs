pub mod charts;
pub mod dashboard;
pub mod dataset;
pub mod indicators;
pub mod maps;
