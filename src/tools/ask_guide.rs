//! MCP `ask_guide` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `ask_guide` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AskGuideParams {
    /// The visitor's question, in free text.
    #[schemars(description = "Free-text question about Binondo (sites, food, culture, history)")]
    pub query: String,

    /// Session to append the exchange to.
    #[schemars(
        description = "Session id returned by a previous ask_guide call. Omit for a one-off question."
    )]
    pub session_id: Option<String>,

    /// Open a new session for this exchange when no session_id is given.
    #[schemars(
        description = "Set true (without session_id) to start a new session and keep this exchange in it. Close it with close_session when done."
    )]
    #[serde(default)]
    pub start_session: bool,
}
