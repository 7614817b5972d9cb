mod cli;
mod server;
mod tools;

use anyhow::Result;
use binondo_guide::{config, guide, knowledge, session};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "binondo", version, about = "Binondo heritage guide for the terminal and MCP clients")]
struct Cli {
    /// Config file to use instead of ~/.binondo/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer one question and exit
    Ask {
        /// The question, e.g. "What is the history of Eng Bee Tin?"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Show the detected category and entity before the answer
        #[arg(long)]
        explain: bool,
    },
    /// Start an interactive chat session
    Chat,
    /// List the sites, food spots and dishes the guide knows
    Topics {
        /// Restrict to one group: heritage_site, food_spot, traditional_food
        #[arg(long)]
        group: Option<String>,
    },
    /// Print example questions
    Suggest,
    /// Check the knowledge base and configuration
    Doctor,
    /// Start the MCP server (stdio or http, per config)
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let config = config::GuideConfig::load_from(&config_path)?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for MCP JSON-RPC and chat output.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Ask { query, explain } => {
            cli::ask::ask(&config, &query.join(" "), explain)?;
        }
        Command::Chat => {
            cli::chat::chat(&config)?;
        }
        Command::Topics { group } => {
            cli::topics::topics(&config, group.as_deref())?;
        }
        Command::Suggest => {
            cli::topics::suggest()?;
        }
        Command::Doctor => {
            cli::doctor::doctor(&config, &config_path)?;
        }
        Command::Serve => {
            server::serve(config).await?;
        }
    }

    Ok(())
}
