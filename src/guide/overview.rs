//! Category-wide answers used when no entity was named.

use super::classify::contains_any;
use super::format::bullets;
use crate::knowledge::KnowledgeBase;

/// Which overview a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overview {
    Food,
    Heritage,
    Culture,
    History,
    Church,
    Escolta,
    Ongpin,
    Comprehensive,
    Help,
}

/// Topic keyword sets in priority order.
const TOPICS: &[(Overview, &[&str])] = &[
    (
        Overview::Food,
        &["food", "eat", "restaurant", "spots", "dining", "cuisine"],
    ),
    (
        Overview::Heritage,
        &["heritage", "sites", "church", "plaza", "street", "buildings"],
    ),
    (
        Overview::Culture,
        &["cultural", "traditions", "festivals", "culture", "events", "celebrations"],
    ),
    (
        Overview::History,
        &["history", "oldest", "established", "founded", "chinatown"],
    ),
    (
        Overview::Church,
        &["binondo church", "saint lorenzo", "lorenzo ruiz"],
    ),
    (Overview::Escolta, &["escolta", "queen of streets"]),
    (Overview::Ongpin, &["ongpin", "commercial"]),
    (
        Overview::Comprehensive,
        &["all", "everything", "comprehensive", "overview", "about binondo"],
    ),
];

/// Pick the overview for a raw query; `Help` when no topic keyword is present.
pub fn select_overview(query: &str) -> Overview {
    let query = query.to_lowercase();
    TOPICS
        .iter()
        .find(|(_, words)| contains_any(&query, words))
        .map(|(overview, _)| *overview)
        .unwrap_or(Overview::Help)
}

pub fn format_overview(kb: &KnowledgeBase, query: &str) -> String {
    render(kb, select_overview(query))
}

pub fn render(kb: &KnowledgeBase, overview: Overview) -> String {
    match overview {
        Overview::Food => food(kb),
        Overview::Heritage => heritage(kb),
        Overview::Culture => culture(kb),
        Overview::History => history(kb),
        Overview::Church => CHURCH.to_string(),
        Overview::Escolta => escolta(kb),
        Overview::Ongpin => ongpin(kb),
        Overview::Comprehensive => comprehensive(kb),
        Overview::Help => HELP.to_string(),
    }
}

fn food(kb: &KnowledgeBase) -> String {
    let spots = kb
        .food_spots
        .iter()
        .map(|spot| {
            let headline = match spot.established {
                Some(year) => format!("{} **{}** (Est. {})", spot.icon, spot.name, year),
                None => format!("{} **{}**", spot.icon, spot.name),
            };
            format!("{headline}\n{}", bullets(spot.at_a_glance))
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    let dishes = kb
        .traditional_foods
        .iter()
        .map(|food| format!("- {} {} - {}", food.icon, food.display_name(), food.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🍜 **Amazing Food Spots in Binondo!**

Here are the must-visit places for authentic Chinese-Filipino cuisine:

{spots}

**Traditional Foods to Try:**
{dishes}
- 🍜 Fresh noodles and wontons

The food scene here represents over 400 years of Chinese-Filipino culinary fusion! 🏮"
    )
}

fn heritage(kb: &KnowledgeBase) -> String {
    let sites = kb
        .heritage_sites
        .iter()
        .map(|site| {
            let headline = match site.nickname {
                Some(nickname) => format!("{} **{} - \"{}\"**", site.icon, site.name, nickname),
                None => format!("{} **{}**", site.icon, site.name),
            };
            format!("{headline}\n{}", bullets(site.at_a_glance))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "🏛️ **Binondo's Amazing Heritage Sites!**

Discover over 430 years of history in these iconic locations:

{sites}

Each site tells the story of how Chinese immigrants built their community while preserving their heritage! 🏮"
    )
}

fn culture(kb: &KnowledgeBase) -> String {
    let festivals = kb
        .festivals
        .iter()
        .map(|f| format!("- {} **{}** - {}", f.icon, f.name, f.description))
        .collect::<Vec<_>>()
        .join("\n");
    let businesses = kb
        .businesses
        .iter()
        .map(|b| format!("- {} **{}** - {}", b.icon, b.name, b.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🎭 **Rich Cultural Traditions of Binondo!**

Experience 430+ years of living Chinese-Filipino culture:

🎊 **Major Festivals:**
{festivals}

🏪 **Traditional Businesses:**
{businesses}

🗣️ **Living Culture:**
- Languages: Hokkien Chinese, Filipino, and English spoken daily
- Family businesses spanning multiple generations
- Unique blend of Catholic faith with Chinese ancestral traditions
- Traditional architecture mixed with modern adaptations

This isn't just history - it's a living, breathing culture that continues today! 🏮"
    )
}

fn history(kb: &KnowledgeBase) -> String {
    let h = kb.history;
    format!(
        "📚 **The Fascinating History of Binondo!**

🏮 **{significance} - Since {year}!**

**The Beginning:**
- Established in {establishment}
- {purpose}
- {age}

**Why It's Special:**
- First Chinatown in the world (predates San Francisco's by over 250 years!)
- Built for Chinese who converted to Christianity
- {role}
- Survived Spanish colonization, American occupation, Japanese invasion, and modernization

**Cultural Significance:**
- Home to Saint Lorenzo Ruiz, the first Filipino saint (Chinese-Filipino heritage)
- Preserved Chinese traditions while adapting to Filipino culture
- Created unique Chinese-Filipino fusion in food, architecture, and customs

**Today:**
- Still a thriving community with original families' descendants
- Maintains traditional businesses alongside modern establishments
- Living testament to successful cultural integration

From a small settlement for Chinese Catholics to the world's oldest Chinatown - Binondo's story is truly remarkable! 🏮",
        significance = h.significance,
        year = h.established_year,
        establishment = h.establishment,
        purpose = h.purpose,
        age = h.age,
        role = h.role,
    )
}

fn escolta(kb: &KnowledgeBase) -> String {
    let Some(site) = kb.heritage_site("escolta_street") else {
        return HELP.to_string();
    };
    format!(
        "🏛️ **{name} - {nickname}**

**Historic \"Queen of Streets\"**

- **Period**: {period}
- **Description**: {description}
- **Highlights**:
  - {highlights}

Escolta Street is a must-visit for its rich history and stunning architecture. Explore its Art Deco and Neoclassical buildings and experience the vibrant shopping culture that has defined Manila for over a century! 🏮",
        name = site.name,
        nickname = site.nickname.unwrap_or("Historic Street"),
        period = site.period.unwrap_or("Historic period"),
        description = site.description,
        highlights = site.highlights.join(", "),
    )
}

fn ongpin(kb: &KnowledgeBase) -> String {
    let Some(site) = kb.heritage_site("ongpin_street") else {
        return HELP.to_string();
    };
    format!(
        "🏪 **{name} - {significance}**

**Main Commercial Artery of Binondo**

- **Description**: {description}
- **Highlights**:
  - {highlights}

Ongpin Street is the heart of Binondo's commercial district, offering a unique blend of traditional Chinese businesses and modern conveniences. From gold shops to medicine stores, it's a bustling street that showcases the rich cultural heritage of Binondo! 🏮",
        name = site.name,
        significance = site.significance.unwrap_or("Historic Street"),
        description = site.description,
        highlights = site.highlights.join(", "),
    )
}

fn comprehensive(kb: &KnowledgeBase) -> String {
    let sites = kb
        .heritage_sites
        .iter()
        .map(|s| match s.founded {
            Some(year) => format!("{} {} ({})", s.icon, s.name, year),
            None => format!("{} {}", s.icon, s.name),
        })
        .collect::<Vec<_>>()
        .join("\n");
    let spots = kb
        .food_spots
        .iter()
        .map(|s| {
            let first = s.at_a_glance.first().copied().unwrap_or(s.description);
            match s.established {
                Some(year) => format!("{} {} ({}) - {}", s.icon, s.name, year, first),
                None => format!("{} {} - {}", s.icon, s.name, first),
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    let traditions = kb
        .festivals
        .iter()
        .take(2)
        .map(|f| format!("{} {}", f.icon, f.name))
        .chain(kb.businesses.iter().take(2).map(|b| format!("{} {}", b.icon, b.name)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🏮 **Complete Guide to Binondo - World's Oldest Chinatown!**

**🏛️ HERITAGE SITES:**
{sites}

**🍜 MUST-TRY FOOD:**
{spots}

**🎭 CULTURAL TRADITIONS:**
{traditions}

**📚 AMAZING HISTORY:**
- Established {year} - {age}
- {significance}
- {purpose}

**Why Binondo is Special:**
It's not just a tourist destination - it's a living, breathing community where 400+ years of Chinese-Filipino culture continues to thrive. From traditional businesses run by the same families for generations to festivals that blend Catholic and Chinese traditions, Binondo is truly unique! 🏮",
        year = kb.history.established_year,
        age = kb.history.age,
        significance = kb.history.significance,
        purpose = kb.history.purpose,
    )
}

const CHURCH: &str = "⛪ **Binondo Church - A Sacred Heritage Site!**

**Minor Basilica of Saint Lorenzo Ruiz**

🏛️ **Historical Significance:**
- Founded in 1596 (just 2 years after Binondo was established!)
- First church built in Binondo
- Dedicated to Saint Lorenzo Ruiz, the first Filipino saint and martyr

✨ **Architectural Beauty:**
- Neo-classical style with unique Chinese architectural influences
- Beautiful baroque altar featuring Chinese motifs
- Religious art blending Filipino, Chinese, and Spanish styles
- Historical artifacts from the Spanish colonial period

🙏 **Cultural Importance:**
- Center of Catholic worship for the Chinese-Filipino community
- Houses the tomb and shrine of Saint Lorenzo Ruiz
- Represents the successful blend of Chinese culture with Catholic faith
- Site of important community celebrations and religious festivals

**Why Visit:**
The church is a perfect example of how Binondo successfully blended different cultures. You'll see Chinese design elements in a Catholic church, representing the unique identity of Chinese-Filipino Catholics who built this community over 400 years ago! 🏮";

/// Default menu of topics.
pub const HELP: &str = "🏮 **Welcome to Binondo Heritage Guide!**

I'm here to help you discover the amazing world of Binondo - the world's oldest Chinatown!

**What would you like to know about?**

🏛️ **Heritage Sites** - Churches, plazas, historic streets
🍜 **Food & Restaurants** - Traditional cuisine and famous spots
🎭 **Cultural Traditions** - Festivals, customs, and practices
📚 **History** - How Binondo became the world's oldest Chinatown
⛪ **Specific Sites** - Binondo Church, Escolta Street, Ongpin Street

**Try asking:**
- \"Tell me about food spots in Binondo\"
- \"What are the heritage sites?\"
- \"What's the history of Binondo?\"
- \"What cultural festivals happen here?\"
- \"What is the history of Eng Bee Tin?\"

I'm excited to share the rich 430+ year heritage of this amazing district with you! 🏮";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::binondo;

    #[test]
    fn empty_query_selects_help() {
        assert_eq!(select_overview(""), Overview::Help);
        assert_eq!(select_overview("hello there"), Overview::Help);
    }

    #[test]
    fn food_outranks_heritage() {
        assert_eq!(select_overview("food near the church"), Overview::Food);
    }

    #[test]
    fn church_phrases_are_caught_by_heritage_first() {
        // "binondo church" contains "church", which the heritage set checks earlier
        assert_eq!(select_overview("binondo church"), Overview::Heritage);
        assert_eq!(select_overview("who was saint lorenzo"), Overview::Church);
    }

    #[test]
    fn commercial_selects_ongpin() {
        assert_eq!(select_overview("commercial district"), Overview::Ongpin);
        let text = render(binondo(), Overview::Ongpin);
        assert!(text.starts_with("🏪 **Ongpin Street - Main commercial artery of Binondo**"));
    }

    #[test]
    fn escolta_overview_uses_record_fields() {
        let text = render(binondo(), Overview::Escolta);
        assert!(text.contains("Escolta Street - Queen of Streets"));
        assert!(text.contains("Early 1900s to 1960s"));
    }

    #[test]
    fn culture_lists_every_festival_and_business() {
        let kb = binondo();
        let text = render(kb, Overview::Culture);
        for festival in kb.festivals {
            assert!(text.contains(festival.name));
        }
        for business in kb.businesses {
            assert!(text.contains(business.name));
        }
    }

    #[test]
    fn history_overview_mentions_founding_year() {
        let text = render(binondo(), Overview::History);
        assert!(text.contains("World's oldest Chinatown - Since 1594!"));
        assert!(text.contains("- Settlement for Catholic Chinese immigrants"));
    }

    #[test]
    fn comprehensive_covers_every_group() {
        let kb = binondo();
        assert_eq!(select_overview("tell me everything"), Overview::Comprehensive);
        let text = render(kb, Overview::Comprehensive);
        assert!(text.contains("Binondo Church (Minor Basilica of Saint Lorenzo Ruiz) (1596)"));
        assert!(text.contains("Eng Bee Tin Chinese Deli (1912)"));
        assert!(text.contains("Chinese New Year"));
    }
}
