//! Alias-substring entity extraction.
//!
//! Two policies are supported. [`MatchPolicy::Declaration`] returns every alias
//! found in the query, in alias-table order. [`MatchPolicy::Longest`] drops an
//! alias whose every occurrence sits inside an occurrence of a longer matched
//! alias, then orders the survivors longest first, so the first match is the
//! most specific one ("plaza san lorenzo" before, and instead of, "plaza").

use serde::{Deserialize, Serialize};

use crate::knowledge::AliasTable;

/// How overlapping alias matches are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Longest alias wins; aliases nested inside a longer match are dropped.
    #[default]
    Longest,
    /// Every substring hit, in alias-table order.
    Declaration,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Longest => "longest",
            Self::Declaration => "declaration",
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "longest" => Ok(Self::Longest),
            "declaration" => Ok(Self::Declaration),
            _ => Err(format!("unknown match policy: {s}")),
        }
    }
}

/// An alias found in a query and the entity key it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AliasMatch {
    pub alias: &'static str,
    pub key: &'static str,
}

/// Find every alias of `aliases` present in `query`.
///
/// Never fails; an empty result means no entity was named.
pub fn extract(query: &str, aliases: &AliasTable, policy: MatchPolicy) -> Vec<AliasMatch> {
    let query = query.to_lowercase();

    let hits: Vec<(AliasMatch, Vec<(usize, usize)>)> = aliases
        .iter()
        .filter(|alias| !alias.phrase.is_empty())
        .filter_map(|alias| {
            let spans: Vec<(usize, usize)> = query
                .match_indices(alias.phrase)
                .map(|(start, s)| (start, start + s.len()))
                .collect();
            if spans.is_empty() {
                None
            } else {
                Some((
                    AliasMatch {
                        alias: alias.phrase,
                        key: alias.key,
                    },
                    spans,
                ))
            }
        })
        .collect();

    match policy {
        MatchPolicy::Declaration => hits.into_iter().map(|(m, _)| m).collect(),
        MatchPolicy::Longest => {
            let mut kept: Vec<AliasMatch> = hits
                .iter()
                .filter(|(m, spans)| !is_shadowed(m.alias.len(), spans, &hits))
                .map(|(m, _)| *m)
                .collect();
            // stable: ties keep table order
            kept.sort_by(|a, b| b.alias.len().cmp(&a.alias.len()));
            kept
        }
    }
}

/// True if every span lies inside a span of some strictly longer hit.
fn is_shadowed(
    len: usize,
    spans: &[(usize, usize)],
    hits: &[(AliasMatch, Vec<(usize, usize)>)],
) -> bool {
    spans.iter().all(|&(start, end)| {
        hits.iter()
            .filter(|(other, _)| other.alias.len() > len)
            .flat_map(|(_, other_spans)| other_spans.iter())
            .any(|&(o_start, o_end)| o_start <= start && end <= o_end)
    })
}
