mod helpers;

use binondo_guide::guide::overview::HELP;
use binondo_guide::guide::{classify, MatchPolicy, QueryCategory};
use binondo_guide::knowledge::TopicGroup;
use helpers::{guide, kb, pairs, render};

const QUERIES: &[&str] = &[
    "",
    "   ",
    "hello",
    "Tell me about the history of Eng Bee Tin",
    "food spots",
    "What makes Escolta special?",
    "¿Dónde está Ongpin?",
    "PLAZA SAN LORENZO architecture",
    "🏮🏮🏮",
    "where can I find hopia and tikoy and dim sum?",
];

#[test]
fn every_alias_extracts_its_key() {
    for alias in kb().aliases.iter() {
        for policy in [MatchPolicy::Longest, MatchPolicy::Declaration] {
            let found = pairs(alias.phrase, policy);
            assert!(
                found.iter().any(|&(_, key)| key == alias.key),
                "{policy}: {:?} did not yield {}",
                alias.phrase,
                alias.key
            );
        }
    }
}

#[test]
fn extraction_ignores_case() {
    for alias in kb().aliases.iter() {
        let upper = alias.phrase.to_uppercase();
        assert_eq!(
            pairs(&upper, MatchPolicy::Declaration),
            pairs(alias.phrase, MatchPolicy::Declaration)
        );
    }
}

#[test]
fn longest_is_a_subset_of_declaration() {
    for query in QUERIES {
        let all = pairs(query, MatchPolicy::Declaration);
        for hit in pairs(query, MatchPolicy::Longest) {
            assert!(all.contains(&hit), "{query:?}: {hit:?}");
        }
    }
}

#[test]
fn classify_is_total() {
    for query in QUERIES {
        let category = classify(query);
        assert!(QueryCategory::ALL.contains(&category));
    }
}

#[test]
fn responses_are_never_empty() {
    let guide = guide();
    for query in QUERIES {
        assert!(!guide.respond(query).text.is_empty(), "{query:?}");
    }
    for entry in TopicGroup::ALL.iter().flat_map(|&g| kb().entries(g)) {
        for category in QueryCategory::ALL {
            assert!(!render(Some(entry.key()), category, "").is_empty());
        }
    }
}

#[test]
fn responses_are_deterministic() {
    let guide = guide();
    for query in QUERIES {
        assert_eq!(guide.respond(query).text, guide.respond(query).text);
    }
}

#[test]
fn site_history_names_the_site() {
    for site in kb().heritage_sites {
        let text = render(Some(site.key), QueryCategory::History, "");
        assert!(text.contains(site.name), "{}", site.key);
    }
}

#[test]
fn unknown_entity_is_answered_by_overview() {
    assert_eq!(render(Some("atlantis"), QueryCategory::General, ""), HELP);
    let food = render(Some("atlantis"), QueryCategory::Food, "best food");
    assert!(food.contains("Amazing Food Spots in Binondo!"));
}

#[test]
fn traditional_food_ignores_category() {
    let history = render(Some("hopia"), QueryCategory::History, "");
    for category in QueryCategory::ALL {
        assert_eq!(render(Some("hopia"), category, ""), history);
    }
}
