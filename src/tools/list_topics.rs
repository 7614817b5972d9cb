//! MCP `list_topics` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `list_topics` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListTopicsParams {
    /// Optional topic group to restrict the listing to.
    #[schemars(
        description = "Optional group filter: 'heritage_site', 'food_spot' or 'traditional_food'"
    )]
    pub group: Option<String>,
}
