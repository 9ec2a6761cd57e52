//! Boundary checks shared by the calculators

use recyclab_types::{Error, Result};

/// A mass that may be missing (NaN) but never negative or infinite.
pub(crate) fn ensure_mass(field: &str, value: f64) -> Result<()> {
    if value.is_infinite() {
        return Err(Error::invalid_input(field, "value is infinite"));
    }
    if value < 0.0 {
        return Err(Error::invalid_input(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

/// A mass that must be present: like `ensure_mass`, and NaN is rejected.
pub(crate) fn ensure_number(field: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(Error::invalid_input(field, "value is not a number"));
    }
    ensure_mass(field, value)
}

/// A reference sample mass used as a fixed divisor.
pub(crate) fn ensure_reference(field: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(Error::invalid_input(
            field,
            format!("reference mass must be positive (got {})", value),
        ));
    }
    Ok(())
}

/// Divisor usable for a ratio: present and non-zero.
pub(crate) fn usable_divisor(value: f64) -> Option<f64> {
    if value.is_nan() || value == 0.0 {
        None
    } else {
        Some(value)
    }
}
