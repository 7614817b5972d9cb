//! The compiled-in Binondo knowledge base.

use super::aliases::AliasTable;
use super::types::{
    DistrictHistory, Festival, FoodSpot, HeritageSite, TimelineEntry, TraditionalBusiness,
    TraditionalFood,
};
use super::KnowledgeBase;

pub(super) static BINONDO: KnowledgeBase = KnowledgeBase {
    heritage_sites: HERITAGE_SITES,
    food_spots: FOOD_SPOTS,
    traditional_foods: TRADITIONAL_FOODS,
    festivals: FESTIVALS,
    businesses: BUSINESSES,
    history: &HISTORY,
    aliases: AliasTable::new(ALIASES),
};

const HERITAGE_SITES: &[HeritageSite] = &[
    HeritageSite {
        key: "binondo_church",
        name: "Binondo Church (Minor Basilica of Saint Lorenzo Ruiz)",
        icon: "⛪",
        nickname: None,
        founded: Some("1596"),
        established: None,
        period: None,
        description: "This beautiful neo-classical church with Chinese architectural influences is dedicated to Saint Lorenzo Ruiz, the first Filipino saint and martyr. It features a baroque altar with Chinese motifs and serves as the center of Catholic worship for the Chinese-Filipino community.",
        highlights: &[
            "First church in Binondo",
            "Dedicated to first Filipino saint",
            "Chinese architectural influences",
            "Baroque altar with Chinese motifs",
        ],
        history: Some("Founded in 1596, just two years after Binondo was established, this church was built to serve the growing Catholic Chinese community. It became the spiritual center where Chinese immigrants could practice their newly adopted Catholic faith while maintaining their cultural identity."),
        architecture: Some("Neo-classical design with unique Chinese architectural elements, featuring a baroque altar decorated with Chinese motifs that represent the fusion of Spanish Catholic and Chinese artistic traditions."),
        significance: Some("Home to the tomb and shrine of Saint Lorenzo Ruiz, the first Filipino saint who was of Chinese-Filipino heritage, making this church a symbol of successful cultural integration."),
        monument: None,
        decline_and_revival: None,
        businesses: None,
        at_a_glance: &[
            "Founded: 1596 (just 2 years after Binondo!)",
            "Dedicated to Saint Lorenzo Ruiz, the first Filipino saint",
            "Beautiful neo-classical architecture with Chinese influences",
            "Features a baroque altar with Chinese motifs",
        ],
    },
    HeritageSite {
        key: "escolta_street",
        name: "Escolta Street",
        icon: "🏛️",
        nickname: Some("Queen of Streets"),
        founded: None,
        established: None,
        period: Some("Early 1900s to 1960s"),
        description: "Manila's premier shopping district featuring Art Deco and Neoclassical buildings. Currently undergoing heritage conservation and revitalization efforts.",
        highlights: &[
            "Historic commercial heart of Manila",
            "Art Deco architecture",
            "Featured in Filipino literature",
            "Heritage conservation ongoing",
        ],
        history: Some("During the American colonial period and post-war era, Escolta Street was the most fashionable shopping destination in Manila, rivaling major commercial streets in other Asian cities. It was home to the finest shops, theaters, and restaurants."),
        architecture: Some("Features stunning Art Deco and Neoclassical buildings from the early 20th century, including the iconic Capitol Theater and various heritage commercial structures."),
        significance: None,
        monument: None,
        decline_and_revival: Some("Declined in the 1970s as commercial activity moved to other areas, but is now experiencing a renaissance through heritage conservation efforts and cultural initiatives."),
        businesses: None,
        at_a_glance: &[
            "Manila's premier shopping district (1900s-1960s)",
            "Beautiful Art Deco and Neoclassical buildings",
            "Currently undergoing heritage conservation",
            "Featured in Filipino literature and films",
        ],
    },
    HeritageSite {
        key: "plaza_san_lorenzo",
        name: "Plaza San Lorenzo Ruiz",
        icon: "🏛️",
        nickname: None,
        founded: None,
        established: Some("Spanish colonial period (late 16th century)"),
        period: None,
        description: "The central plaza and heart of Binondo district, featuring a monument to Saint Lorenzo Ruiz and surrounded by heritage buildings.",
        highlights: &[
            "Central plaza of Binondo",
            "Monument to Saint Lorenzo Ruiz",
            "Gathering place for community events",
            "Traditional Chinese-style landscaping",
        ],
        history: Some("Originally called Plaza Calderon de la Barca, this plaza has been the heart of Binondo since the Spanish colonial period. It was renamed in 1988 to honor Saint Lorenzo Ruiz."),
        architecture: None,
        significance: None,
        monument: Some("The monument to Saint Lorenzo Ruiz was erected in 1996 to commemorate the canonization of the first Filipino saint, who was born in Binondo to a Chinese father and Filipino mother."),
        decline_and_revival: None,
        businesses: None,
        at_a_glance: &[
            "The heart and central plaza of Binondo",
            "Monument to Saint Lorenzo Ruiz (erected 1996)",
            "Gathering place for community events and celebrations",
            "Traditional Chinese-style landscaping",
        ],
    },
    HeritageSite {
        key: "ongpin_street",
        name: "Ongpin Street",
        icon: "🏪",
        nickname: None,
        founded: None,
        established: None,
        period: None,
        description: "Named after Roman Ongpin, this bustling street is lined with traditional Chinese businesses, medicine shops, gold shops, restaurants, and traditional goods stores.",
        highlights: &[
            "Traditional Chinese medicine shops",
            "Gold and jewelry shops",
            "Chinese restaurants",
            "Traditional goods stores",
            "Chinese signage and shop houses",
        ],
        history: Some("Named after Roman Ongpin, a prominent Chinese-Filipino businessman and philanthropist who contributed significantly to the development of Binondo's commercial district."),
        architecture: None,
        significance: Some("Main commercial artery of Binondo"),
        monument: None,
        decline_and_revival: None,
        businesses: Some("Home to generations-old family businesses specializing in traditional Chinese medicine, gold trading, authentic Chinese cuisine, and cultural goods."),
        at_a_glance: &[
            "Main commercial artery of Binondo",
            "Traditional Chinese businesses line the street",
            "Gold shops, medicine stores, restaurants",
            "Bustling atmosphere with Chinese signage",
        ],
    },
];

const FOOD_SPOTS: &[FoodSpot] = &[
    FoodSpot {
        key: "eng_bee_tin",
        name: "Eng Bee Tin Chinese Deli",
        icon: "🥟",
        kind: None,
        established: Some("1912"),
        significance: Some("Oldest Chinese bakery in the Philippines"),
        specialties: &["Hopia (Chinese pastries)", "Tikoy (rice cakes)", "Chinese delicacies"],
        description: "Over 110 years old, this historic bakery is famous for traditional Chinese pastries and treats, especially during Chinese New Year.",
        history: Some("Founded in 1912 by Guan Eng Bee, this family-owned bakery started as a small shop selling traditional Chinese pastries to the Binondo community. Over four generations, it has become an institution, preserving authentic Chinese baking traditions while adapting to Filipino tastes."),
        founder: Some("Guan Eng Bee, a Chinese immigrant who brought traditional pastry-making techniques from Fujian province to the Philippines."),
        evolution: Some("Started with just hopia and tikoy, but expanded to include various Chinese delicacies, mooncakes, and fusion pastries that blend Chinese and Filipino flavors."),
        cultural_impact: Some("Became the go-to place for Chinese New Year treats and traditional celebrations, helping preserve Chinese culinary traditions in the Filipino-Chinese community."),
        recipes: Some("Many recipes are closely guarded family secrets passed down through four generations, maintaining the authentic taste that has made them famous."),
        modern_era: Some("Now has multiple branches but the original Binondo location remains the flagship, still operated by the founding family."),
        signature: None,
        legacy: None,
        fusion_concept: None,
        timeline: &[
            TimelineEntry { era: "1912-1930s", summary: "Small family bakery specializing in hopia and tikoy" },
            TimelineEntry { era: "1940s-1960s", summary: "Survived WWII and expanded offerings during post-war boom" },
            TimelineEntry { era: "1970s-1990s", summary: "Became the go-to place for Chinese New Year treats" },
            TimelineEntry { era: "2000s-Present", summary: "Four generations later, still family-owned with multiple branches" },
        ],
        at_a_glance: &[
            "The oldest Chinese bakery in the Philippines!",
            "Famous for: Hopia (Chinese pastries) and Tikoy (rice cakes)",
            "Perfect for traditional Chinese New Year treats",
        ],
    },
    FoodSpot {
        key: "dong_bei",
        name: "Dong Bei Dumplings",
        icon: "🥢",
        kind: None,
        established: None,
        significance: None,
        specialties: &["Traditional Chinese dumplings", "Fresh noodles"],
        description: "Authentic Chinese-style dumplings that locals love, serving traditional recipes passed down through generations.",
        history: Some("Established by immigrants from Northeast China (Dongbei region), bringing authentic dumpling-making techniques and recipes from their homeland."),
        founder: None,
        evolution: None,
        cultural_impact: None,
        recipes: None,
        modern_era: None,
        signature: Some("Known for hand-made dumplings with thin, delicate wrappers and flavorful fillings that represent authentic Northern Chinese cuisine."),
        legacy: None,
        fusion_concept: None,
        timeline: &[],
        at_a_glance: &[
            "Authentic Chinese-style dumplings",
            "Fresh noodles made daily",
            "Local favorite for traditional recipes",
        ],
    },
    FoodSpot {
        key: "ma_mon_luk",
        name: "Ma Mon Luk",
        icon: "🍜",
        kind: None,
        established: None,
        significance: Some("Historic noodle house"),
        specialties: &["Wonton noodles", "Chinese noodle soups"],
        description: "Famous for their wonton noodles and traditional Chinese noodle preparations.",
        history: Some("Founded by Ma Mon Luk, a Chinese immigrant who popularized wonton noodles in the Philippines. The restaurant became legendary for its authentic Cantonese-style noodle soups."),
        founder: None,
        evolution: None,
        cultural_impact: None,
        recipes: None,
        modern_era: None,
        signature: None,
        legacy: Some("Though the original location has moved, the Ma Mon Luk name remains synonymous with quality Chinese noodles in Manila."),
        fusion_concept: None,
        timeline: &[],
        at_a_glance: &[
            "Historic noodle house",
            "Famous wonton noodles and Chinese soups",
            "A Binondo institution",
        ],
    },
    FoodSpot {
        key: "cafe_mezzanine",
        name: "Cafe Mezzanine",
        icon: "🍽️",
        kind: Some("Filipino-Chinese fusion"),
        established: None,
        significance: None,
        specialties: &[],
        description: "Historic restaurant serving unique Filipino-Chinese fusion cuisine, blending the best of both culinary traditions.",
        history: Some("Represents the evolution of Chinese cuisine in the Philippines, creating dishes that appeal to both Chinese and Filipino palates."),
        founder: None,
        evolution: None,
        cultural_impact: None,
        recipes: None,
        modern_era: None,
        signature: None,
        legacy: None,
        fusion_concept: Some("Pioneered the concept of Filipino-Chinese fusion, creating unique dishes that reflect the cultural blending in Binondo."),
        timeline: &[],
        at_a_glance: &[
            "Filipino-Chinese fusion cuisine",
            "Unique blend of both culinary traditions",
            "Great for experiencing cultural fusion",
        ],
    },
];

const TRADITIONAL_FOODS: &[TraditionalFood] = &[
    TraditionalFood {
        key: "hopia",
        icon: "🥟",
        description: "Traditional Chinese pastries with sweet or savory fillings",
        history: Some("Brought by Chinese immigrants from Fujian province, adapted over time to include Filipino ingredients and flavors"),
        significance: None,
        varieties: Some("Mongo (mung bean), ube (purple yam), pork, and other local adaptations"),
        tradition: None,
        technique: None,
    },
    TraditionalFood {
        key: "tikoy",
        icon: "🍰",
        description: "Sticky rice cakes, especially popular during Chinese New Year",
        history: None,
        significance: Some("Symbol of good luck and prosperity in Chinese culture"),
        varieties: None,
        tradition: Some("Families gather to make tikoy together during Chinese New Year preparations"),
        technique: None,
    },
    TraditionalFood {
        key: "dim_sum",
        icon: "🥢",
        description: "Traditional Chinese small plates and tea culture",
        history: Some("Cantonese tradition of small dishes served with tea, adapted to local tastes in Binondo"),
        significance: None,
        varieties: None,
        tradition: None,
        technique: None,
    },
    TraditionalFood {
        key: "char_siu",
        icon: "🍖",
        description: "Chinese roasted pork and other Cantonese specialties",
        history: None,
        significance: None,
        varieties: None,
        tradition: None,
        technique: Some("Traditional Cantonese barbecue methods preserved by Chinese families in Binondo"),
    },
];

const FESTIVALS: &[Festival] = &[
    Festival {
        key: "chinese_new_year",
        name: "Chinese New Year",
        icon: "🧧",
        description: "Grand celebrations with dragon dances, fireworks, and traditional performances",
        history: Some("Celebrated in Binondo since the 1600s, making it one of the oldest continuous Chinese New Year celebrations outside of China"),
        significance: None,
        traditions: Some("Dragon and lion dances, fireworks, traditional music, and special foods like tikoy and hopia"),
        practices: None,
    },
    Festival {
        key: "mooncake_festival",
        name: "Mooncake Festival",
        icon: "🥮",
        description: "Mid-Autumn celebration with family gatherings and mooncake sharing",
        history: None,
        significance: Some("Celebrates family unity and harvest, with families gathering to share mooncakes and admire the full moon"),
        traditions: None,
        practices: None,
    },
    Festival {
        key: "hungry_ghost_festival",
        name: "Hungry Ghost Festival",
        icon: "👻",
        description: "Ancestral worship honoring deceased family members",
        history: None,
        significance: None,
        traditions: None,
        practices: Some("Burning incense, offering food to ancestors, and burning ceremonial paper money"),
    },
    Festival {
        key: "dragon_boat_festival",
        name: "Dragon Boat Festival",
        icon: "🐉",
        description: "Cultural performances and traditional foods",
        history: None,
        significance: None,
        traditions: None,
        practices: None,
    },
];

const BUSINESSES: &[TraditionalBusiness] = &[
    TraditionalBusiness {
        key: "gold_trading",
        name: "Gold Trading",
        icon: "💰",
        description: "Historic center with intricate Chinese jewelry designs",
        history: Some("Chinese immigrants brought gold trading expertise, establishing Binondo as Manila's gold trading center"),
        tradition: None,
    },
    TraditionalBusiness {
        key: "chinese_medicine",
        name: "Chinese Medicine",
        icon: "🌿",
        description: "Herbal shops with centuries-old practices and acupuncture",
        history: None,
        tradition: Some("Practitioners trained in traditional Chinese medicine continue ancient healing practices"),
    },
    TraditionalBusiness {
        key: "calligraphy",
        name: "Calligraphy",
        icon: "✍️",
        description: "Traditional Chinese brush painting and custom calligraphy",
        history: None,
        tradition: None,
    },
    TraditionalBusiness {
        key: "paper_goods",
        name: "Paper Goods",
        icon: "📜",
        description: "Ceremonial items for ancestral worship and festivals",
        history: None,
        tradition: None,
    },
];

const HISTORY: DistrictHistory = DistrictHistory {
    established_year: "1594",
    establishment: "1594 by Spanish colonial government",
    significance: "World's oldest Chinatown",
    purpose: "Settlement for Catholic Chinese immigrants",
    age: "Over 430 years of continuous Chinese-Filipino heritage",
    role: "Historic trading hub connecting China and the Philippines",
};

/// Alias table in lookup order. Order only matters under the declaration policy.
const ALIASES: &[(&str, &str)] = &[
    ("eng bee tin", "eng_bee_tin"),
    ("engbeetin", "eng_bee_tin"),
    ("eng bee", "eng_bee_tin"),
    ("dong bei", "dong_bei"),
    ("dongbei", "dong_bei"),
    ("ma mon luk", "ma_mon_luk"),
    ("mamonluk", "ma_mon_luk"),
    ("cafe mezzanine", "cafe_mezzanine"),
    ("binondo church", "binondo_church"),
    ("saint lorenzo", "binondo_church"),
    ("lorenzo ruiz", "binondo_church"),
    ("escolta", "escolta_street"),
    ("escolta street", "escolta_street"),
    ("queen of streets", "escolta_street"),
    ("ongpin", "ongpin_street"),
    ("ongpin street", "ongpin_street"),
    ("plaza san lorenzo", "plaza_san_lorenzo"),
    ("plaza", "plaza_san_lorenzo"),
    ("hopia", "hopia"),
    ("tikoy", "tikoy"),
    ("dim sum", "dim_sum"),
    ("char siu", "char_siu"),
];
