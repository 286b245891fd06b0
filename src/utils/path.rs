use std::str::FromStr;

use anyhow::anyhow;
use yoga_core::AppError;

/// Parses a numeric path segment into a typed id; anything else is a 400.
///
/// Path parameters are taken as strings so a non-numeric id reaches the
/// handler and gets the same `{"error": ...}` body as every other failure.
pub fn parse_id<T: FromStr>(raw: &str) -> Result<T, AppError> {
    raw.parse::<T>()
        .map_err(|_| AppError::bad_request(anyhow!("Invalid id: {}", raw)))
}
