//! Player record model as returned by the lookup provider.
//!
//! Every field is optional: upstream records are sparse, and an absent
//! field must never prevent a record from being encoded or re-served.
//! Wire names follow the player-search JSON contract (`memberId`,
//! `uscf_id`, `expiration_date`, ...); camel-case spellings are accepted
//! as aliases on input.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A scalar cell value that upstream may send either as text or as a number.
///
/// The value is kept exactly as received so that rendering never applies
/// numeric formatting or rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl FieldValue {
    /// True when the value is text with no characters.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

/// The six rating pools tracked per player.
///
/// Rating keys the model does not name are kept in `extra` so a record
/// re-serializes with every field upstream sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default, deserialize_with = "lenient_value", skip_serializing_if = "Option::is_none")]
    pub regular: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_value", skip_serializing_if = "Option::is_none")]
    pub quick: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_value", skip_serializing_if = "Option::is_none")]
    pub blitz: Option<FieldValue>,
    #[serde(
        default,
        alias = "onlineRegular",
        deserialize_with = "lenient_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub online_regular: Option<FieldValue>,
    #[serde(
        default,
        alias = "onlineQuick",
        deserialize_with = "lenient_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub online_quick: Option<FieldValue>,
    #[serde(
        default,
        alias = "onlineBlitz",
        deserialize_with = "lenient_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub online_blitz: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single player as returned by a lookup.
///
/// Modelled fields that arrive with an unsupported JSON shape (a boolean,
/// array or object where a scalar is expected) deserialize as absent.
/// Unmodelled fields are kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "memberId",
        alias = "member_id",
        deserialize_with = "lenient_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub member_id: Option<FieldValue>,
    #[serde(
        default,
        alias = "uscfId",
        deserialize_with = "lenient_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub uscf_id: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_value", skip_serializing_if = "Option::is_none")]
    pub state: Option<FieldValue>,
    #[serde(
        default,
        deserialize_with = "lenient_ratings",
        skip_serializing_if = "Option::is_none"
    )]
    pub ratings: Option<Ratings>,
    #[serde(
        default,
        alias = "expirationDate",
        deserialize_with = "lenient_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_value<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Number(n) => Some(FieldValue::Number(n)),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_ratings<'de, D>(deserializer: D) -> Result<Option<Ratings>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        v @ Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

impl PlayerRecord {
    /// Start a record with only a name; remaining fields are filled with
    /// the `with_*` builders.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_member_id(mut self, id: impl Into<FieldValue>) -> Self {
        self.member_id = Some(id.into());
        self
    }

    pub fn with_uscf_id(mut self, id: impl Into<FieldValue>) -> Self {
        self.uscf_id = Some(id.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<FieldValue>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_ratings(mut self, ratings: Ratings) -> Self {
        self.ratings = Some(ratings);
        self
    }

    pub fn with_expiration_date(mut self, date: impl Into<FieldValue>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    /// The USCF id, falling back to the member id when the record carries
    /// no explicit (non-empty) USCF id.
    pub fn effective_uscf_id(&self) -> Option<&FieldValue> {
        self.uscf_id
            .as_ref()
            .filter(|v| !v.is_empty_text())
            .or(self.member_id.as_ref())
    }

    /// Display name, or the empty string when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
