use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ClearSessionParams {
    #[schemars(description = "Session id whose conversation history should be discarded")]
    pub session_id: String,
}
