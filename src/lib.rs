//! Binondo heritage guide: keyword-matched answers about the world's oldest Chinatown.
//!
//! The guide holds a static, hand-authored knowledge base of heritage sites, food
//! spots, traditional foods, festivals and district history, and answers free-text
//! questions by picking and filling a canned template:
//!
//! | Step | What it does |
//! |------|--------------|
//! | **Extract** | Finds alias phrases (`"escolta"`, `"eng bee tin"`) in the query |
//! | **Classify** | Assigns one of six categories from fixed keyword sets |
//! | **Format** | Renders the entity template for that category, or a topic overview |
//!
//! Nothing here can fail: an unmatched query gets the help menu.
//!
//! ```
//! use binondo_guide::guide::{Guide, QueryCategory};
//!
//! let reply = Guide::default().respond("Tell me about the history of Eng Bee Tin");
//! assert_eq!(reply.category, QueryCategory::History);
//! assert!(reply.text.contains("Guan Eng Bee"));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`knowledge`]: Typed knowledge records, the alias table and invariant checks
//! - [`guide`]: Entity extraction, query classification and response templates
//! - [`session`]: Conversations, the per-session store and transcript export

pub mod config;
pub mod guide;
pub mod knowledge;
pub mod session;
