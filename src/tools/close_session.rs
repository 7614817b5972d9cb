use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CloseSessionParams {
    #[schemars(description = "Session id to remove, along with its history")]
    pub session_id: String,
}
