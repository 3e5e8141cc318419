//! Search request defaults and parameter resolution shared by every
//! entry point (HTTP and command line).

use crate::error::CoreError;
use crate::player::FieldValue;

/// Query used when the caller supplies no (or an empty) player name.
pub const DEFAULT_QUERY: &str = "Smith";

/// Default result bound for JSON searches.
pub const DEFAULT_SEARCH_MAX: usize = 10;

/// Default result bound for CSV exports and saved searches.
pub const DEFAULT_EXPORT_MAX: usize = 50;

/// Pick the first non-empty candidate name, or [`DEFAULT_QUERY`].
///
/// Callers pass the primary `name` parameter first and any aliases after.
pub fn resolve_query<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_QUERY)
        .to_string()
}

/// Resolve a result bound that may arrive as a number or as text.
///
/// Absent and empty values take `default`; anything that is not a
/// non-negative integer is a validation error.
pub fn resolve_max(raw: Option<&FieldValue>, default: usize) -> Result<usize, CoreError> {
    match raw {
        None => Ok(default),
        Some(FieldValue::Text(s)) if s.trim().is_empty() => Ok(default),
        Some(FieldValue::Text(s)) => s.trim().parse().map_err(|_| invalid_max(s)),
        Some(FieldValue::Number(n)) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| invalid_max(&n.to_string())),
    }
}

fn invalid_max(raw: &str) -> CoreError {
    CoreError::Validation(format!(
        "'max' must be a non-negative integer, got '{raw}'"
    ))
}
