//! Keyword-set query classification.

use serde::{Deserialize, Serialize};

/// Coarse intent of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    History,
    Architecture,
    Significance,
    Food,
    Location,
    General,
}

impl QueryCategory {
    pub const ALL: [QueryCategory; 6] = [
        Self::History,
        Self::Architecture,
        Self::Significance,
        Self::Food,
        Self::Location,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Architecture => "architecture",
            Self::Significance => "significance",
            Self::Food => "food",
            Self::Location => "location",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QueryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown query category: {s}"))
    }
}

/// Keyword sets in priority order. The first set with any substring hit wins.
const KEYWORD_SETS: &[(QueryCategory, &[&str])] = &[
    (
        QueryCategory::History,
        &["history", "founded", "established", "started", "began", "origin"],
    ),
    (
        QueryCategory::Architecture,
        &["architecture", "building", "design", "structure"],
    ),
    (
        QueryCategory::Significance,
        &["significance", "important", "why", "special"],
    ),
    (
        QueryCategory::Food,
        &["food", "eat", "taste", "specialty", "famous for"],
    ),
    (
        QueryCategory::Location,
        &["location", "where", "address", "find"],
    ),
];

/// Classify a raw query. Total: anything unmatched (including `""`) is `General`.
pub fn classify(query: &str) -> QueryCategory {
    let query = query.to_lowercase();
    KEYWORD_SETS
        .iter()
        .find(|(_, words)| contains_any(&query, words))
        .map(|(category, _)| *category)
        .unwrap_or(QueryCategory::General)
}

/// True if any of `words` occurs in `haystack` as a substring.
pub(crate) fn contains_any(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| haystack.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_general() {
        assert_eq!(classify(""), QueryCategory::General);
    }

    #[test]
    fn history_outranks_architecture() {
        assert_eq!(
            classify("What is the history and architecture of the church?"),
            QueryCategory::History
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("WHY is it SPECIAL"), QueryCategory::Significance);
        assert_eq!(classify("Where is it?"), QueryCategory::Location);
    }

    #[test]
    fn substring_hits_count() {
        // "great" contains "eat"
        assert_eq!(classify("great"), QueryCategory::Food);
        assert_eq!(classify("what's the building like"), QueryCategory::Architecture);
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in QueryCategory::ALL {
            assert_eq!(category.as_str().parse::<QueryCategory>(), Ok(category));
        }
        assert!("trivia".parse::<QueryCategory>().is_err());
    }
}
