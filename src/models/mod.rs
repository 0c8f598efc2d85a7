pub mod comparison;
pub mod dashboard;
pub mod error;
pub mod esg;
pub mod navigation;
pub mod recommendations;
pub mod validate;
