//! Query interpretation and response selection.
//!
//! A [`Guide`] runs the [`extract`](extract::extract) and
//! [`classify`](classify::classify) passes over a question, then renders the
//! matching template. It holds only shared references and is freely shareable
//! between sessions and threads.

pub mod classify;
pub mod extract;
pub mod format;
pub mod overview;

pub use classify::{classify, QueryCategory};
pub use extract::{extract, AliasMatch, MatchPolicy};
pub use format::format_response;

use serde::Serialize;

use crate::knowledge::KnowledgeBase;

/// The answer to one question, plus how it was interpreted.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub category: QueryCategory,
    /// Every alias found, most specific first under the longest policy.
    pub matches: Vec<AliasMatch>,
    /// Entity the answer is about, if one was named and resolved.
    pub entity: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Guide {
    kb: &'static KnowledgeBase,
    policy: MatchPolicy,
}

impl Guide {
    pub fn new(kb: &'static KnowledgeBase, policy: MatchPolicy) -> Self {
        Self { kb, policy }
    }

    pub fn knowledge(&self) -> &'static KnowledgeBase {
        self.kb
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Answer a question. Never fails: unmatched input gets the help text.
    pub fn respond(&self, query: &str) -> Reply {
        let matches = extract(query, &self.kb.aliases, self.policy);
        let category = classify(query);

        // The first match picks the entity; it only counts if it resolves.
        let entity = matches
            .first()
            .map(|m| m.key)
            .filter(|key| self.kb.lookup(key).is_some());
        let text = format_response(self.kb, entity, category, query);

        tracing::debug!(
            category = %category,
            entity = entity.unwrap_or("-"),
            matches = matches.len(),
            "query interpreted"
        );

        Reply {
            text,
            category,
            matches,
            entity,
        }
    }
}

impl Default for Guide {
    fn default() -> Self {
        Self::new(crate::knowledge::binondo(), MatchPolicy::default())
    }
}

/// Example questions offered to new users.
pub fn suggested_questions() -> &'static [&'static str] {
    &[
        "Tell me about the history of Binondo Church",
        "What are the must-visit heritage sites in Binondo?",
        "What traditional foods should I try in Binondo?",
        "How did Binondo become the world's oldest Chinatown?",
        "What cultural festivals happen in Binondo?",
        "Where can I find traditional Chinese medicine shops?",
        "What's the significance of Escolta Street?",
        "Tell me about Saint Lorenzo Ruiz",
        "What are some traditional Chinese-Filipino dishes?",
        "How has Binondo preserved its heritage over 400+ years?",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_are_answered_deterministically() {
        let guide = Guide::default();
        for question in suggested_questions() {
            let first = guide.respond(question);
            assert!(!first.text.is_empty());
            assert_eq!(first.text, guide.respond(question).text);
        }
    }

    #[test]
    fn site_suggestion_names_the_church() {
        let reply = Guide::default().respond(suggested_questions()[0]);
        assert_eq!(reply.entity, Some("binondo_church"));
        assert_eq!(reply.category, QueryCategory::History);
        assert_ne!(reply.text, overview::HELP);
    }

    #[test]
    fn reply_records_interpretation() {
        let reply = Guide::default().respond("Why is Escolta special?");
        assert_eq!(reply.category, QueryCategory::Significance);
        assert_eq!(reply.entity, Some("escolta_street"));
        assert_eq!(reply.matches.len(), 1);
    }
}
