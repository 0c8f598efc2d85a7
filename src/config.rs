/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend serving every `/api/...` endpoint
    pub const BACKEND_ORIGIN: &'static str = "http://127.0.0.1:8000";

    /// Enable dashboard re-polling while the screen is mounted
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Dashboard polling interval in milliseconds
    pub const DASHBOARD_POLL_INTERVAL_MS: u32 = 5_000;

    /// Number of trailing energy-trend points drawn in KPI sparklines
    pub const SPARKLINE_POINTS: usize = 4;
}
