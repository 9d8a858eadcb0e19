//! Helpers that turn raw `sqlx` results into handler errors.
//!
//! ```ignore
//! let tournament = require_record(
//!     db::matches::find_match(pool, match_id).await,
//!     "Match not found",
//! )?;
//! ```

use crate::error::ApiError;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> Result<T, ApiError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(ApiError::NotFound(not_found_message.to_string())),
        Err(e) => Err(ApiError::Database(e)),
    }
}

/// Treat an empty result set as NotFound.
pub fn require_rows<T>(
    result: Result<Vec<T>, sqlx::Error>,
    not_found_message: &str,
) -> Result<Vec<T>, ApiError> {
    let rows = result?;
    if rows.is_empty() {
        return Err(ApiError::NotFound(not_found_message.to_string()));
    }
    Ok(rows)
}
