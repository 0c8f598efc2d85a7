pub mod sparkline;
pub mod units;

pub use units::{
    clamp_score, format_percent, format_score, group_thousands, scale_energy, scale_mass, to_fixed,
};
