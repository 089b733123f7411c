//! Range checks shared by the engine configurations.

use vanilla_core::types::PricingError;

/// Checks that a count lies in `[1, max]`.
pub(crate) fn validate_count(
    field: &'static str,
    value: usize,
    max: usize,
) -> Result<(), PricingError> {
    if value == 0 {
        return Err(PricingError::InvalidConfig {
            field,
            reason: "must be positive, got 0".to_string(),
        });
    }
    if value > max {
        return Err(PricingError::InvalidConfig {
            field,
            reason: format!("must not exceed {max}, got {value}"),
        });
    }
    Ok(())
}
