//! Request parameter types for the search handlers.

use serde::Deserialize;

use playersearch_core::player::FieldValue;
use playersearch_core::search::{resolve_max, resolve_query};

use crate::error::AppResult;

/// Search parameters, from a query string (`?name=&max=`) or a JSON body
/// (`{"name", "max"}`). `player` is accepted as an alias for `name`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub player: Option<String>,
    pub max: Option<FieldValue>,
}

impl SearchParams {
    /// The effective query: `name`, then `player`, then the default.
    pub fn query(&self) -> String {
        resolve_query([self.name.as_deref(), self.player.as_deref()])
    }

    /// The effective result bound, `default` when not supplied.
    pub fn max_results(&self, default: usize) -> AppResult<usize> {
        Ok(resolve_max(self.max.as_ref(), default)?)
    }
}
