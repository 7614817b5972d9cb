//! CLI `ask` command: answer one question and exit.

use anyhow::Result;

use crate::config::GuideConfig;

/// Answer a single question. With `explain`, print how it was interpreted first.
pub fn ask(config: &GuideConfig, query: &str, explain: bool) -> Result<()> {
    let guide = super::guide_from(config);
    let reply = guide.respond(query);

    if explain {
        println!("Category:  {}", reply.category);
        println!("Entity:    {}", reply.entity.unwrap_or("(none)"));
        if !reply.matches.is_empty() {
            let found: Vec<String> = reply
                .matches
                .iter()
                .map(|m| format!("\"{}\" -> {}", m.alias, m.key))
                .collect();
            println!("Matches:   {}", found.join(", "));
        }
        println!("{}", "=".repeat(50));
    }

    println!("{}", reply.text);
    Ok(())
}
