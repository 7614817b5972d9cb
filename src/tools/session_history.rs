//! MCP `session_history` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `session_history` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SessionHistoryParams {
    #[schemars(description = "Session id to list turns for")]
    pub session_id: String,
}
