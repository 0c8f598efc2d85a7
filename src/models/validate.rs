use serde::{Deserialize, Deserializer, de::Error as _};

/// Post-deserialization checks applied to every payload at the client boundary.
///
/// Serde already rejects missing or mistyped fields; this catches values that
/// parse but cannot be rendered sensibly (NaN, negative magnitudes, blank names).
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.validate().map_err(|e| format!("[{i}] {e}")))
    }
}

/// Any finite value, including negative percentages.
pub fn finite(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{field} is not a finite number"))
    }
}

/// Finite and non-negative: emissions, energy, hours.
pub fn magnitude(field: &str, value: f64) -> Result<(), String> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(format!("{field} must not be negative (got {value})"));
    }
    Ok(())
}

/// Largest whole number an `f64` holds exactly (2^53).
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

/// Deserializes a count sent as either `12` or `12.0`.
///
/// Anything negative, fractional or non-finite is rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_EXACT_COUNT {
        Ok(value as u64)
    } else {
        Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {value}"
        )))
    }
}

pub fn non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}
