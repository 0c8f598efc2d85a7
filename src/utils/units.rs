use crate::models::error::AppError;

/// Unit labels for one ladder, smallest first.
struct UnitLadder {
    micro: &'static str,
    milli: &'static str,
    base: &'static str,
}

const MASS: UnitLadder = UnitLadder {
    micro: "mg",
    milli: "g",
    base: "kg",
};

const ENERGY: UnitLadder = UnitLadder {
    micro: "mWh",
    milli: "Wh",
    base: "kWh",
};

/// Formats `value` with a fixed number of decimals, rounding half away from zero.
///
/// `format!("{:.2}")` alone rounds exact ties to even.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * factor;
    // Past 2^53 the multiplication has already lost the fractional digits.
    if !scaled.is_finite() || scaled.abs() >= 9.0e15 {
        return format!("{value:.decimals$}");
    }
    let rounded = scaled.round() / factor;
    format!("{rounded:.decimals$}")
}

fn scale(value: f64, ladder: &UnitLadder) -> Result<String, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidMagnitude(value));
    }

    let formatted = if value == 0.0 {
        format!("0 {}", ladder.base)
    } else if value < 0.001 {
        format!("{} {}", to_fixed(value * 1_000_000.0, 2), ladder.micro)
    } else if value < 1.0 {
        format!("{} {}", to_fixed(value * 1_000.0, 2), ladder.milli)
    } else {
        format!("{} {}", to_fixed(value, 2), ladder.base)
    };

    Ok(formatted)
}

/// Renders a CO₂ mass given in kilograms as mg, g or kg.
pub fn scale_mass(kg: f64) -> Result<String, AppError> {
    scale(kg, &MASS)
}

/// Renders an energy amount given in kilowatt-hours as mWh, Wh or kWh.
pub fn scale_energy(kwh: f64) -> Result<String, AppError> {
    scale(kwh, &ENERGY)
}

/// Clamps a 0–100 score for display. NaN renders as 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// A 0–100 score clamped and printed to one decimal place.
pub fn format_score(score: f64) -> String {
    to_fixed(clamp_score(score), 1)
}

/// [`format_score`] with a trailing `%`.
pub fn format_percent(score: f64) -> String {
    format!("{}%", format_score(score))
}

/// Inserts thousands separators: `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
