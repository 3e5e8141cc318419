//! Artifact naming convention.
//!
//! A search query maps to a filesystem-safe identifier by replacing every
//! character outside `[A-Za-z0-9]` with `_`. The mapping is lossy: queries
//! that differ only in replaced characters (`"O'Brien"` and `"O Brien"`)
//! share an identifier and therefore share an artifact file, last write
//! wins.

use crate::csv::CSV_EXTENSION;
use crate::error::CoreError;

/// Filename prefix of persisted search results.
pub const ARTIFACT_PREFIX: &str = "results_";

/// Filename prefix offered to clients downloading an export.
pub const EXPORT_PREFIX: &str = "players_";

/// Derive a filesystem-safe identifier from a search query.
///
/// # Examples
///
/// ```
/// use playersearch_core::naming::derive_identifier;
///
/// assert_eq!(derive_identifier("O'Brien Jr."), "O_Brien_Jr_");
/// assert_eq!(derive_identifier("Smith"), "Smith");
/// ```
pub fn derive_identifier(query: &str) -> String {
    query
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Filename a query's results are persisted under: `results_<id>.csv`.
pub fn artifact_filename(query: &str) -> String {
    format!(
        "{ARTIFACT_PREFIX}{}.{CSV_EXTENSION}",
        derive_identifier(query)
    )
}

/// Download filename for an ad-hoc export: `players_<id>.csv`.
pub fn export_filename(query: &str) -> String {
    format!("{EXPORT_PREFIX}{}.{CSV_EXTENSION}", derive_identifier(query))
}

/// Whether `name` carries the table-file extension.
pub fn is_table_file(name: &str) -> bool {
    name.ends_with(&format!(".{CSV_EXTENSION}"))
}

/// Check that a caller-supplied artifact name is a single path component.
///
/// Rejects empty names, `.` and `..`, and anything containing a path
/// separator or NUL, so a name can never address a file outside the
/// storage root.
pub fn validate_artifact_name(name: &str) -> Result<(), CoreError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name == "." || name == ".." {
        "name refers to a directory"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(CoreError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
