//! Knowledge record definitions.
//!
//! Every record is a plain struct over `&'static str` data so the whole knowledge
//! base can live in a `static`. Fields that only some entries carry are `Option`s
//! (or empty slices for lists); renderers supply the fallback text.

use serde::Serialize;

/// Topic group an alias-addressable entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicGroup {
    /// Churches, plazas and historic streets.
    HeritageSite,
    /// Bakeries, noodle houses and restaurants.
    FoodSpot,
    /// Dishes and pastries rather than places.
    TraditionalFood,
}

impl TopicGroup {
    pub const ALL: [TopicGroup; 3] = [Self::HeritageSite, Self::FoodSpot, Self::TraditionalFood];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeritageSite => "heritage_site",
            Self::FoodSpot => "food_spot",
            Self::TraditionalFood => "traditional_food",
        }
    }

    /// Heading used when listing the group to a human.
    pub fn title(&self) -> &'static str {
        match self {
            Self::HeritageSite => "Heritage Sites",
            Self::FoodSpot => "Food Spots",
            Self::TraditionalFood => "Traditional Foods",
        }
    }
}

impl std::fmt::Display for TopicGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TopicGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heritage_site" | "heritage" | "sites" => Ok(Self::HeritageSite),
            "food_spot" | "food" | "restaurants" => Ok(Self::FoodSpot),
            "traditional_food" | "dishes" => Ok(Self::TraditionalFood),
            _ => Err(format!("unknown topic group: {s}")),
        }
    }
}

/// A church, plaza or street of historic note.
#[derive(Debug, Clone, Serialize)]
pub struct HeritageSite {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub nickname: Option<&'static str>,
    /// Founding year, when the site has a precise one.
    pub founded: Option<&'static str>,
    /// Looser establishment era (e.g. "Spanish colonial period").
    pub established: Option<&'static str>,
    /// Heyday of the site, used for streets.
    pub period: Option<&'static str>,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub history: Option<&'static str>,
    pub architecture: Option<&'static str>,
    pub significance: Option<&'static str>,
    pub monument: Option<&'static str>,
    pub decline_and_revival: Option<&'static str>,
    pub businesses: Option<&'static str>,
    /// Short bullets for the heritage overview.
    pub at_a_glance: &'static [&'static str],
}

impl HeritageSite {
    /// Best available date for the site: founding year, then era, then heyday.
    pub fn dated(&self) -> Option<&'static str> {
        self.founded.or(self.established).or(self.period)
    }

    /// One extra anecdote, if the record carries any.
    pub fn anecdote(&self) -> Option<&'static str> {
        self.monument.or(self.decline_and_revival).or(self.businesses)
    }
}

/// A bakery, restaurant or noodle house.
#[derive(Debug, Clone, Serialize)]
pub struct FoodSpot {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Cuisine style, e.g. "Filipino-Chinese fusion".
    pub kind: Option<&'static str>,
    pub established: Option<&'static str>,
    pub significance: Option<&'static str>,
    pub specialties: &'static [&'static str],
    pub description: &'static str,
    pub history: Option<&'static str>,
    pub founder: Option<&'static str>,
    pub evolution: Option<&'static str>,
    pub cultural_impact: Option<&'static str>,
    pub recipes: Option<&'static str>,
    pub modern_era: Option<&'static str>,
    pub signature: Option<&'static str>,
    pub legacy: Option<&'static str>,
    pub fusion_concept: Option<&'static str>,
    /// Decade-by-decade history. Only spots with a documented lineage carry one.
    pub timeline: &'static [TimelineEntry],
    pub at_a_glance: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineEntry {
    pub era: &'static str,
    pub summary: &'static str,
}

/// A dish or pastry.
#[derive(Debug, Clone, Serialize)]
pub struct TraditionalFood {
    pub key: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub history: Option<&'static str>,
    pub significance: Option<&'static str>,
    pub varieties: Option<&'static str>,
    pub tradition: Option<&'static str>,
    pub technique: Option<&'static str>,
}

impl TraditionalFood {
    /// Display name derived from the key: `dim_sum` becomes `Dim Sum`.
    pub fn display_name(&self) -> String {
        self.key
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Festival {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub history: Option<&'static str>,
    pub significance: Option<&'static str>,
    pub traditions: Option<&'static str>,
    pub practices: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraditionalBusiness {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub history: Option<&'static str>,
    pub tradition: Option<&'static str>,
}

/// District-level facts.
#[derive(Debug, Clone, Serialize)]
pub struct DistrictHistory {
    pub established_year: &'static str,
    pub establishment: &'static str,
    pub significance: &'static str,
    pub purpose: &'static str,
    pub age: &'static str,
    pub role: &'static str,
}

/// A resolved alias-addressable entity.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    HeritageSite(&'a HeritageSite),
    FoodSpot(&'a FoodSpot),
    TraditionalFood(&'a TraditionalFood),
}

impl<'a> Entry<'a> {
    pub fn key(&self) -> &'static str {
        match self {
            Self::HeritageSite(site) => site.key,
            Self::FoodSpot(spot) => spot.key,
            Self::TraditionalFood(food) => food.key,
        }
    }

    pub fn group(&self) -> TopicGroup {
        match self {
            Self::HeritageSite(_) => TopicGroup::HeritageSite,
            Self::FoodSpot(_) => TopicGroup::FoodSpot,
            Self::TraditionalFood(_) => TopicGroup::TraditionalFood,
        }
    }

    /// Human-readable name of the entity.
    pub fn name(&self) -> String {
        match self {
            Self::HeritageSite(site) => site.name.to_string(),
            Self::FoodSpot(spot) => spot.name.to_string(),
            Self::TraditionalFood(food) => food.display_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(key: &'static str) -> TraditionalFood {
        TraditionalFood {
            key,
            icon: "",
            description: "",
            history: None,
            significance: None,
            varieties: None,
            tradition: None,
            technique: None,
        }
    }

    #[test]
    fn display_name_title_cases_key() {
        assert_eq!(food("dim_sum").display_name(), "Dim Sum");
        assert_eq!(food("hopia").display_name(), "Hopia");
        assert_eq!(food("char_siu").display_name(), "Char Siu");
    }

    #[test]
    fn topic_group_parses_aliases() {
        assert_eq!("food".parse::<TopicGroup>().unwrap(), TopicGroup::FoodSpot);
        assert_eq!("heritage_site".parse::<TopicGroup>().unwrap(), TopicGroup::HeritageSite);
        assert!("noodles".parse::<TopicGroup>().is_err());
    }
}
