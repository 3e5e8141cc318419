use async_trait::async_trait;

use playersearch_core::player::PlayerRecord;

use crate::{LookupError, PlayerLookup};

/// [`PlayerLookup`] over a fixed record list.
///
/// Matches records whose name contains the query, ignoring case. An empty
/// query matches everything.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    records: Vec<PlayerRecord>,
}

impl StaticLookup {
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl PlayerLookup for StaticLookup {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<PlayerRecord>, LookupError> {
        let needle = query.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|r| r.display_name().to_lowercase().contains(&needle))
            .take(max_results)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> StaticLookup {
        StaticLookup::new(vec![
            PlayerRecord::named("SMITH, JOHN"),
            PlayerRecord::named("Jones, Mary"),
            PlayerRecord::named("Smithson, Ann"),
        ])
    }

    #[tokio::test]
    async fn matches_case_insensitively() {
        let found = lookup().search("smith", 10).await.unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, ["SMITH, JOHN", "Smithson, Ann"]);
    }

    #[tokio::test]
    async fn respects_max_results() {
        assert_eq!(lookup().search("", 2).await.unwrap().len(), 2);
        assert!(lookup().search("smith", 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_match_is_empty() {
        assert!(lookup().search("Carlsen", 10).await.unwrap().is_empty());
    }
}
