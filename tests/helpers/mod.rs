#![allow(dead_code)]

use binondo_guide::guide::{extract, Guide, MatchPolicy, QueryCategory};
use binondo_guide::knowledge::{self, KnowledgeBase};

pub fn kb() -> &'static KnowledgeBase {
    knowledge::binondo()
}

/// Guide over the shipped knowledge base with the default (longest) policy.
pub fn guide() -> Guide {
    Guide::new(kb(), MatchPolicy::Longest)
}

/// `(alias, key)` pairs found in `query` under `policy`.
pub fn pairs(query: &str, policy: MatchPolicy) -> Vec<(&'static str, &'static str)> {
    extract(query, &kb().aliases, policy)
        .into_iter()
        .map(|m| (m.alias, m.key))
        .collect()
}

/// Render with the formatter directly, bypassing extraction.
pub fn render(entity: Option<&str>, category: QueryCategory, query: &str) -> String {
    binondo_guide::guide::format_response(kb(), entity, category, query)
}
