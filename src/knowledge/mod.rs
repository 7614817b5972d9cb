//! Static Binondo knowledge base.
//!
//! The knowledge base is a compiled-in constant: typed records per topic group
//! ([`HeritageSite`], [`FoodSpot`], [`TraditionalFood`]) plus supporting records
//! (festivals, traditional businesses, district history) and the [`AliasTable`]
//! used by entity extraction. Use [`binondo`] to get the shared instance.

pub mod aliases;
mod data;
pub mod types;

pub use aliases::{Alias, AliasTable};
pub use types::{
    DistrictHistory, Entry, Festival, FoodSpot, HeritageSite, TimelineEntry, TopicGroup,
    TraditionalBusiness, TraditionalFood,
};

use serde::Serialize;
use std::collections::HashSet;

/// Invariant violations in a knowledge base.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("alias {alias:?} points at unknown entity {key:?}")]
    DanglingAlias { alias: String, key: String },
    #[error("alias {0:?} is not lowercase")]
    AliasNotLowercase(String),
    #[error("alias {0:?} is declared more than once")]
    DuplicateAlias(String),
    #[error("entity key {0:?} is used by more than one entry")]
    DuplicateKey(String),
}

/// One line of the topic catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogueEntry {
    pub group: TopicGroup,
    pub key: &'static str,
    pub name: String,
    pub aliases: Vec<&'static str>,
}

#[derive(Debug)]
pub struct KnowledgeBase {
    pub heritage_sites: &'static [HeritageSite],
    pub food_spots: &'static [FoodSpot],
    pub traditional_foods: &'static [TraditionalFood],
    pub festivals: &'static [Festival],
    pub businesses: &'static [TraditionalBusiness],
    pub history: &'static DistrictHistory,
    pub aliases: AliasTable,
}

/// The shared Binondo knowledge base.
pub fn binondo() -> &'static KnowledgeBase {
    &data::BINONDO
}

impl KnowledgeBase {
    /// Resolve an entity key. Groups are searched food spots first, then heritage
    /// sites, then traditional foods.
    pub fn lookup(&self, key: &str) -> Option<Entry<'_>> {
        if let Some(spot) = self.food_spot(key) {
            return Some(Entry::FoodSpot(spot));
        }
        if let Some(site) = self.heritage_site(key) {
            return Some(Entry::HeritageSite(site));
        }
        self.traditional_food(key).map(Entry::TraditionalFood)
    }

    pub fn heritage_site(&self, key: &str) -> Option<&HeritageSite> {
        self.heritage_sites.iter().find(|s| s.key == key)
    }

    pub fn food_spot(&self, key: &str) -> Option<&FoodSpot> {
        self.food_spots.iter().find(|s| s.key == key)
    }

    pub fn traditional_food(&self, key: &str) -> Option<&TraditionalFood> {
        self.traditional_foods.iter().find(|f| f.key == key)
    }

    /// Every alias-addressable entry of one group, in declaration order.
    pub fn entries(&self, group: TopicGroup) -> Vec<Entry<'_>> {
        match group {
            TopicGroup::HeritageSite => self.heritage_sites.iter().map(Entry::HeritageSite).collect(),
            TopicGroup::FoodSpot => self.food_spots.iter().map(Entry::FoodSpot).collect(),
            TopicGroup::TraditionalFood => {
                self.traditional_foods.iter().map(Entry::TraditionalFood).collect()
            }
        }
    }

    /// Every alias-addressable entity with its aliases, optionally for one group.
    pub fn catalogue(&self, group: Option<TopicGroup>) -> Vec<CatalogueEntry> {
        TopicGroup::ALL
            .into_iter()
            .filter(|g| group.map_or(true, |wanted| wanted == *g))
            .flat_map(|g| self.entries(g))
            .map(|entry| CatalogueEntry {
                group: entry.group(),
                key: entry.key(),
                name: entry.name(),
                aliases: self.aliases.aliases_for(entry.key()).collect(),
            })
            .collect()
    }

    /// [`catalogue`](Self::catalogue) with the group given by name, as typed by a user.
    pub fn catalogue_named(&self, group: Option<&str>) -> Result<Vec<CatalogueEntry>, String> {
        let group = group.map(str::parse::<TopicGroup>).transpose()?;
        Ok(self.catalogue(group))
    }

    /// Check the alias table and key invariants. Returns every violation found.
    pub fn validate(&self) -> Result<(), Vec<KnowledgeError>> {
        let mut errors = Vec::new();

        let mut keys = HashSet::new();
        let all_keys = self
            .heritage_sites
            .iter()
            .map(|s| s.key)
            .chain(self.food_spots.iter().map(|s| s.key))
            .chain(self.traditional_foods.iter().map(|f| f.key));
        for key in all_keys {
            if !keys.insert(key) {
                errors.push(KnowledgeError::DuplicateKey(key.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for alias in self.aliases.iter() {
            if alias.phrase != alias.phrase.to_lowercase() {
                errors.push(KnowledgeError::AliasNotLowercase(alias.phrase.to_string()));
            }
            if !seen.insert(alias.phrase) {
                errors.push(KnowledgeError::DuplicateAlias(alias.phrase.to_string()));
            }
            if self.lookup(alias.key).is_none() {
                errors.push(KnowledgeError::DanglingAlias {
                    alias: alias.phrase.to_string(),
                    key: alias.key.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
