//! CSV encoding of player search results.
//!
//! The output format is a compatibility contract with downstream
//! consumers: fixed header, fixed column order, only the `name` column
//! quoted, every row newline-terminated. An empty result set encodes to
//! the [`NO_PLAYERS_FOUND`] sentinel instead of a header-only table.

use std::fmt::Write as _;

use crate::player::{FieldValue, PlayerRecord, Ratings};

/// Column names, in output order.
pub const HEADERS: [&str; 11] = [
    "name",
    "memberId",
    "uscf_id",
    "state",
    "rating_regular",
    "rating_quick",
    "rating_blitz",
    "online_regular",
    "online_quick",
    "online_blitz",
    "expiration_date",
];

/// Returned in place of a table when there are no records.
pub const NO_PLAYERS_FOUND: &str = "No players found";

/// MIME type used when serving encoded tables.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// File extension of persisted tables (without the dot).
pub const CSV_EXTENSION: &str = "csv";

/// Encode an optional record sequence.
///
/// `None` and an empty slice both yield [`NO_PLAYERS_FOUND`].
pub fn encode(records: Option<&[PlayerRecord]>) -> String {
    match records {
        Some(records) => encode_records(records),
        None => NO_PLAYERS_FOUND.to_string(),
    }
}

/// Encode records as a header line followed by one line per record.
///
/// # Examples
///
/// ```
/// use playersearch_core::csv::encode_records;
/// use playersearch_core::player::PlayerRecord;
///
/// let csv = encode_records(&[PlayerRecord::named("Smith, John").with_member_id("12345678")]);
/// assert_eq!(
///     csv.lines().nth(1),
///     Some("\"Smith, John\",12345678,12345678,,,,,,,,")
/// );
/// ```
pub fn encode_records(records: &[PlayerRecord]) -> String {
    if records.is_empty() {
        return NO_PLAYERS_FOUND.to_string();
    }

    let mut out = HEADERS.join(",");
    out.push('\n');

    for record in records {
        push_row(&mut out, record);
    }

    out
}

/// Quote a field per RFC 4180: wrap in double quotes, doubling any quote inside.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn push_row(out: &mut String, record: &PlayerRecord) {
    let ratings = record.ratings.as_ref();
    let rating = |pick: fn(&Ratings) -> Option<&FieldValue>| ratings.and_then(pick);

    let cells: [Option<&FieldValue>; 10] = [
        record.member_id.as_ref(),
        record.effective_uscf_id(),
        record.state.as_ref(),
        rating(|r| r.regular.as_ref()),
        rating(|r| r.quick.as_ref()),
        rating(|r| r.blitz.as_ref()),
        rating(|r| r.online_regular.as_ref()),
        rating(|r| r.online_quick.as_ref()),
        rating(|r| r.online_blitz.as_ref()),
        record.expiration_date.as_ref(),
    ];

    out.push_str(&quote_field(record.display_name()));
    for cell in cells {
        out.push(',');
        if let Some(value) = cell {
            // Writing into a String cannot fail.
            let _ = write!(out, "{value}");
        }
    }
    out.push('\n');
}
