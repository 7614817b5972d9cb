//! CLI `topics` and `suggest` commands.

use anyhow::Result;

use crate::config::GuideConfig;
use crate::knowledge::TopicGroup;

/// Print every named entity, grouped by topic, with the phrases that reach it.
pub fn topics(config: &GuideConfig, group: Option<&str>) -> Result<()> {
    let kb = super::guide_from(config).knowledge();
    let catalogue = kb.catalogue_named(group).map_err(anyhow::Error::msg)?;

    for g in TopicGroup::ALL {
        let entries: Vec<_> = catalogue.iter().filter(|e| e.group == g).collect();
        if entries.is_empty() {
            continue;
        }
        println!("{}", g.title());
        println!("{}", "=".repeat(40));
        for entry in entries {
            println!("  {:<18} {}", entry.key, entry.name);
            println!("  {:<18} aliases: {}", "", entry.aliases.join(", "));
        }
        println!();
    }

    Ok(())
}

/// Print the suggested example questions.
pub fn suggest() -> Result<()> {
    println!("Try asking:");
    for (i, question) in crate::guide::suggested_questions().iter().enumerate() {
        println!("  {:>2}. {question}", i + 1);
    }
    Ok(())
}
