pub mod screen_state;
pub mod use_comparison;
pub mod use_dashboard;
pub mod use_esg_report;
pub mod use_navigation;
pub mod use_recommendations;
