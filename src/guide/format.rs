//! Entity-specific response templates.
//!
//! Each template is a fixed layout: headline, dated line, descriptive paragraph,
//! bulleted list, closing remark. Absent optional fields are replaced with a
//! fallback phrase so no section is ever blank.

use super::classify::QueryCategory;
use super::overview;
use crate::knowledge::{Entry, FoodSpot, HeritageSite, KnowledgeBase, TraditionalFood};

const LANTERN: &str = "🏮";

const SITE_DATE_FALLBACK: &str = "Historic period";
const SITE_ARCHITECTURE_FALLBACK: &str =
    "Features traditional architectural elements that reflect the cultural heritage of Binondo.";
const SITE_SIGNIFICANCE_FALLBACK: &str = "An important part of Binondo's cultural heritage.";
const SPOT_ESTABLISHED_FALLBACK: &str = "Historic establishment";
const SPOT_SIGNIFICANCE_FALLBACK: &str = "A beloved part of Binondo's food scene.";
const SPOT_HISTORY_FALLBACK: &str = "This establishment has been serving the Binondo community for generations, preserving traditional recipes and techniques.";
const SPOT_FOUNDER_FALLBACK: &str = "The founder's name has not been recorded, but the family recipes they started are still served today.";
const SPOT_SPECIALTIES_FALLBACK: &str = "House specialties (ask the staff for today's favorites)";

/// Render the answer for a query.
///
/// With a resolvable `entity_key` the entity template for `category` is used;
/// otherwise the category-wide overview chosen from `query` keywords, ending
/// at the default help text. Always returns a non-empty string.
pub fn format_response(
    kb: &KnowledgeBase,
    entity_key: Option<&str>,
    category: QueryCategory,
    query: &str,
) -> String {
    match entity_key.and_then(|key| kb.lookup(key)) {
        Some(entry) => format_entry(entry, category),
        None => overview::format_overview(kb, query),
    }
}

/// Render the template for one resolved entity.
pub fn format_entry(entry: Entry<'_>, category: QueryCategory) -> String {
    match entry {
        Entry::HeritageSite(site) => format_site(site, category),
        Entry::FoodSpot(spot) => format_spot(spot, category),
        Entry::TraditionalFood(food) => format_traditional_food(food),
    }
}

fn format_site(site: &HeritageSite, category: QueryCategory) -> String {
    match category {
        QueryCategory::History => site_history(site),
        QueryCategory::Architecture => site_architecture(site),
        _ => site_default(site),
    }
}

fn format_spot(spot: &FoodSpot, category: QueryCategory) -> String {
    match category {
        QueryCategory::History if !spot.timeline.is_empty() => spot_lineage(spot),
        QueryCategory::Food | QueryCategory::General => spot_specialties(spot),
        _ => spot_default(spot),
    }
}

fn site_history(site: &HeritageSite) -> String {
    format!(
        "🏛️ **The History of {name}**

📅 **Founded:** {founded}

📖 **Historical Background:**
{background}

🌟 **Key Historical Points:**
{points}

🏗️ **Architectural Significance:**
{architecture}

**Why It Matters:**
This site represents the rich cultural heritage and successful integration of Chinese and Filipino traditions in Binondo! {LANTERN}",
        name = site.name,
        founded = site.dated().unwrap_or(SITE_DATE_FALLBACK),
        background = site.history.unwrap_or(site.description),
        points = bullets(site.highlights),
        architecture = site.architecture.unwrap_or(SITE_ARCHITECTURE_FALLBACK),
    )
}

fn site_architecture(site: &HeritageSite) -> String {
    format!(
        "🏗️ **Architecture of {name}**

🎨 **Architectural Style:**
{style}

🌟 **Notable Features:**
{features}

📅 **Built:** {built}

**Cultural Significance:**
The architecture reflects the unique blend of Chinese, Spanish, and Filipino influences that make Binondo special! {LANTERN}",
        name = site.name,
        style = site.architecture.unwrap_or(site.description),
        features = bullets(site.highlights),
        built = site.dated().unwrap_or(SITE_DATE_FALLBACK),
    )
}

fn site_default(site: &HeritageSite) -> String {
    let headline = match site.nickname {
        Some(nickname) => format!("{} {} - \"{}\"", site.icon, site.name, nickname),
        None => format!("{} {}", site.icon, site.name),
    };
    let anecdote = site
        .anecdote()
        .map(|text| format!("\n\n💡 **Did You Know?**\n{text}"))
        .unwrap_or_default();

    format!(
        "**{headline}**

📅 **Established:** {established}

📖 **Description:**
{description}

🌟 **Highlights:**
{highlights}{anecdote}

**Significance:**
{significance}

A must-visit site to understand Binondo's rich history! {LANTERN}",
        established = site.dated().unwrap_or(SITE_DATE_FALLBACK),
        description = site.description,
        highlights = bullets(site.highlights),
        significance = site.significance.unwrap_or(SITE_SIGNIFICANCE_FALLBACK),
    )
}

/// Founder and decade-by-decade story for spots with a documented lineage.
fn spot_lineage(spot: &FoodSpot) -> String {
    let founded = spot.established.unwrap_or(SPOT_ESTABLISHED_FALLBACK);
    let founder = spot.founder.unwrap_or(SPOT_FOUNDER_FALLBACK);
    let timeline = spot
        .timeline
        .iter()
        .map(|t| format!("- **{}**: {}", t.era, t.summary))
        .collect::<Vec<_>>()
        .join("\n");
    let impact: Vec<&str> = [spot.cultural_impact, spot.recipes, spot.modern_era]
        .into_iter()
        .flatten()
        .collect();
    let evolution = spot
        .evolution
        .map(|text| format!("\n\n🔄 **How It Grew:**\n{text}"))
        .unwrap_or_default();

    format!(
        "{icon} **The Rich History of {name}**

📅 **Founded in {founded}** - a living tradition!

👨‍🍳 **The Founder:**
{founder}

🏪 **Evolution Through the Decades:**
{timeline}{evolution}

🥮 **Cultural Impact:**
{impact}

**Why It's Special:**
{name} represents the successful preservation of Chinese culinary heritage while adapting to Filipino tastes. It's not just a shop - it's a living piece of Binondo's history! {LANTERN}",
        icon = spot.icon,
        name = spot.name,
        impact = bullets(&impact),
    )
}

fn spot_specialties(spot: &FoodSpot) -> String {
    let headline = match (spot.established, spot.kind) {
        (Some(year), _) => format!("{} - Culinary Heritage Since {}", spot.name, year),
        (None, Some(kind)) => format!("{} - {}", spot.name, kind),
        (None, None) => format!("{} - Culinary Heritage of Binondo", spot.name),
    };
    let specialties = if spot.specialties.is_empty() {
        format!("- 🥮 **{SPOT_SPECIALTIES_FALLBACK}**")
    } else {
        spot.specialties
            .iter()
            .map(|s| format!("- 🥮 **{s}**"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let note = spot
        .signature
        .or(spot.fusion_concept)
        .or(spot.legacy)
        .map(|text| format!("\n\n✨ **House Signature:**\n{text}"))
        .unwrap_or_default();

    format!(
        "{icon} **{headline}**

🌟 **Famous Specialties:**
{specialties}

📖 **What Makes It Special:**
{description}{note}

🏆 **Significance:**
{significance}

💡 **Did You Know?**
{history}

Perfect for experiencing authentic Chinese-Filipino culinary traditions! {LANTERN}",
        icon = spot.icon,
        description = spot.description,
        significance = spot.significance.unwrap_or(SPOT_SIGNIFICANCE_FALLBACK),
        history = spot.history.unwrap_or(SPOT_HISTORY_FALLBACK),
    )
}

fn spot_default(spot: &FoodSpot) -> String {
    let specialties = if spot.specialties.is_empty() {
        SPOT_SPECIALTIES_FALLBACK.to_string()
    } else {
        spot.specialties.join(", ")
    };

    format!(
        "{icon} **{name}**

{description}

**Established:** {established}
**Significance:** {significance}
**Specialties:** {specialties}

A true gem of Binondo's culinary heritage! {LANTERN}",
        icon = spot.icon,
        name = spot.name,
        description = spot.description,
        established = spot.established.unwrap_or(SPOT_ESTABLISHED_FALLBACK),
        significance = spot.significance.unwrap_or(SPOT_SIGNIFICANCE_FALLBACK),
    )
}

fn format_traditional_food(food: &TraditionalFood) -> String {
    let name = food.display_name();
    let mut sections = vec![format!("📖 **What It Is:**\n{}", food.description)];
    if let Some(history) = food.history {
        sections.push(format!("📚 **History & Origin:**\n{history}"));
    }
    if let Some(significance) = food.significance {
        sections.push(format!("🌟 **Cultural Significance:**\n{significance}"));
    }
    let extras: Vec<&str> = [food.varieties, food.tradition, food.technique]
        .into_iter()
        .flatten()
        .collect();
    if !extras.is_empty() {
        sections.push(format!("🍽️ **Good to Know:**\n{}", bullets(&extras)));
    }

    format!(
        "{icon} **{name} - Traditional Chinese-Filipino Delicacy**

{sections}

**Where to Try:**
You can find authentic {name} at traditional establishments throughout Binondo, especially at Eng Bee Tin and other historic Chinese bakeries.

A delicious taste of Binondo's culinary heritage! {LANTERN}",
        icon = food.icon,
        sections = sections.join("\n\n"),
    )
}

/// `- item` lines joined by newlines.
pub(crate) fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::binondo;

    #[test]
    fn unknown_key_falls_back_to_overview() {
        let kb = binondo();
        let text = format_response(kb, Some("no_such_place"), QueryCategory::General, "");
        assert_eq!(text, overview::format_overview(kb, ""));
    }

    #[test]
    fn site_fallbacks_fill_missing_fields() {
        let kb = binondo();
        let ongpin = kb.heritage_site("ongpin_street").unwrap();
        let text = site_architecture(ongpin);
        // no architecture field, so the description stands in
        assert!(text.contains(ongpin.description));
        assert!(text.contains(SITE_DATE_FALLBACK));
    }

    #[test]
    fn site_default_shows_nickname_and_anecdote() {
        let kb = binondo();
        let text = site_default(kb.heritage_site("escolta_street").unwrap());
        assert!(text.contains("\"Queen of Streets\""));
        assert!(text.contains("Did You Know?"));
        assert!(text.contains("Early 1900s to 1960s"));
        assert!(text.contains(SITE_SIGNIFICANCE_FALLBACK));
    }

    #[test]
    fn food_history_without_timeline_uses_default_template() {
        let kb = binondo();
        let text = format_entry(Entry::FoodSpot(kb.food_spot("dong_bei").unwrap()), QueryCategory::History);
        assert!(text.contains("**Established:** Historic establishment"));
        assert!(text.contains("Traditional Chinese dumplings, Fresh noodles"));
    }

    #[test]
    fn specialties_template_handles_missing_list() {
        let kb = binondo();
        let text = spot_specialties(kb.food_spot("cafe_mezzanine").unwrap());
        assert!(text.contains("Cafe Mezzanine - Filipino-Chinese fusion"));
        assert!(text.contains(SPOT_SPECIALTIES_FALLBACK));
        assert!(text.contains("House Signature"));
    }

    #[test]
    fn traditional_food_omits_absent_sections() {
        let kb = binondo();
        let text = format_traditional_food(kb.traditional_food("char_siu").unwrap());
        assert!(text.starts_with("🍖 **Char Siu - Traditional Chinese-Filipino Delicacy**"));
        assert!(!text.contains("History & Origin"));
        assert!(!text.contains("Cultural Significance"));
        assert!(text.contains("Traditional Cantonese barbecue methods"));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn lineage_without_founder_uses_founder_fallback() {
        let kb = binondo();
        let spot = FoodSpot {
            founder: None,
            ..kb.food_spot("eng_bee_tin").unwrap().clone()
        };
        let text = spot_lineage(&spot);
        assert!(text.contains(&format!("**The Founder:**\n{SPOT_FOUNDER_FALLBACK}")));
        assert!(!text.contains(SPOT_HISTORY_FALLBACK));
        assert!(text.contains("2000s-Present"));
    }
}
