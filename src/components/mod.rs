pub mod chart;
pub mod comparison;
pub mod dashboard;
pub mod esg_report;
pub mod kpi_card;
pub mod layout;
pub mod model_selector;
pub mod recommendations;
pub mod sparkline;
pub mod status;

pub use comparison::ComparisonScreen;
pub use dashboard::DashboardScreen;
pub use esg_report::EsgReportScreen;
pub use layout::Layout;
pub use recommendations::RecommendationsScreen;
