/// Page title shown in the header and the browser tab
pub const DASHBOARD_TITLE: &str = "Dashboard Monitoring Indikator Pulau Sumatera";

/// Subtitle shown under the page title
pub const DASHBOARD_SUBTITLE: &str = "Monitoring Kemiskinan, Gas Rumah Kaca, dan Ketenagakerjaan";

/// Footer disclaimer: every figure on the page is synthetic
pub const DASHBOARD_FOOTER: &str =
    "Dashboard Monitoring Indikator Pulau Sumatera | Data: Simulasi untuk tujuan demonstrasi";

// =============================================================================
// MAP DEFAULTS
// =============================================================================

/// Initial zoom level for every province map
pub const MAP_ZOOM: u8 = 6;

/// Tile layer used by the browser map
pub const MAP_TILES: &str = "OpenStreetMap";

/// Marker outline colour
pub const MARKER_BORDER_COLOR: &str = "black";

/// Marker outline width in pixels
pub const MARKER_BORDER_WEIGHT: u32 = 1;

/// Popup width hint for map markers
pub const POPUP_MAX_WIDTH: u32 = 250;

// =============================================================================
// CHART DEFAULTS
// =============================================================================

/// Height of the side ranking charts
pub const SIDE_CHART_HEIGHT: u32 = 400;

/// Height of the trend line chart
pub const TREND_CHART_HEIGHT: u32 = 500;

/// Label rotation for charts with province names on the x axis
pub const PROVINCE_TICK_ANGLE: i32 = 45;

/// Upper bound on on-demand trend series kept by the dataset service
pub const SERIES_CACHE_CAPACITY: usize = 32;

/// Common scale for the normalised gas comparison
pub const NORMALIZED_SCALE: f64 = 100.0;
