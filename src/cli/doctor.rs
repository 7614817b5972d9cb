//! CLI `doctor` command: check knowledge-base invariants and print a report.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::GuideConfig;
use crate::guide::QueryCategory;
use crate::knowledge::{self, TopicGroup};

/// Validate the knowledge base and print a health report.
pub fn doctor(config: &GuideConfig, config_path: &Path) -> Result<()> {
    let kb = knowledge::binondo();

    println!("Binondo Guide Health Report");
    println!("===========================");
    println!();
    println!(
        "Config file:       {}{}",
        config_path.display(),
        if config_path.exists() { "" } else { " (not found, using defaults)" }
    );
    println!("Match policy:      {}", config.matching.policy);
    println!("Transport:         {}", config.server.transport);
    println!();
    println!("Knowledge base:");
    for group in TopicGroup::ALL {
        println!("  {:<18} {}", group.title(), kb.entries(group).len());
    }
    println!("  {:<18} {}", "Festivals", kb.festivals.len());
    println!("  {:<18} {}", "Businesses", kb.businesses.len());
    println!("  {:<18} {}", "Aliases", kb.aliases.len());
    println!("  {:<18} {}", "Query categories", QueryCategory::ALL.len());
    println!();

    match kb.validate() {
        Ok(()) => {
            println!("Alias check:       PASSED");
            Ok(())
        }
        Err(errors) => {
            println!("Alias check:       FAILED");
            for e in &errors {
                println!("  - {e}");
            }
            bail!("{} knowledge base problem(s) found", errors.len());
        }
    }
}
