use crate::error::{PoseError, Result};
use crate::Float;

pub mod colmap_loader;
pub mod loading_parameters;

/**
 * Parses a single numeric token, naming the field and line on failure.
 * nan and inf are rejected as well.
 */
pub fn parse_to_float(string: &str, field: &str, line: usize) -> Result<Float> {
    match string.parse::<Float>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PoseError::Parse {
            line,
            reason: format!("{} is not a finite number: '{}'", field, string)
        })
    }
}
