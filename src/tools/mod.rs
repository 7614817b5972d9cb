pub mod ask_guide;
pub mod clear_session;
pub mod close_session;
pub mod list_topics;
pub mod session_history;

use ask_guide::AskGuideParams;
use clear_session::ClearSessionParams;
use close_session::CloseSessionParams;
use list_topics::ListTopicsParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use session_history::SessionHistoryParams;

use crate::session::SessionStore;

/// The guide's MCP tool handler. Holds the shared session store and exposes
/// all MCP tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct GuideTools {
    tool_router: ToolRouter<Self>,
    sessions: SessionStore,
}

#[tool_router]
impl GuideTools {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            tool_router: Self::tool_router(),
            sessions,
        }
    }

    /// Answer a question about Binondo, optionally within a session.
    #[tool(description = "Ask the Binondo heritage guide a question. Answers cover heritage sites, food spots, traditional foods, festivals and history. Pass session_id to continue a conversation, or start_session=true to begin one.")]
    async fn ask_guide(
        &self,
        Parameters(params): Parameters<AskGuideParams>,
    ) -> Result<String, String> {
        tracing::info!(session = ?params.session_id, start = params.start_session, "ask_guide called");

        let answer = self
            .sessions
            .ask(params.session_id.as_deref(), params.start_session, &params.query)
            .map_err(|e| e.to_string())?;

        Ok(serde_json::json!({
            "session_id": answer.session_id,
            "category": answer.reply.category,
            "entity": answer.reply.entity,
            "matches": answer.reply.matches,
            "answer": answer.reply.text,
        })
        .to_string())
    }

    /// Discard a session's conversation history.
    #[tool(description = "Clear the conversation history of a session. The session id stays valid.")]
    async fn clear_session(
        &self,
        Parameters(params): Parameters<ClearSessionParams>,
    ) -> Result<String, String> {
        tracing::info!(session = %params.session_id, "clear_session called");
        self.sessions
            .clear(&params.session_id)
            .map_err(|e| e.to_string())?;
        Ok(serde_json::json!({
            "session_id": params.session_id,
            "status": "cleared",
        })
        .to_string())
    }

    /// Remove a session and its history.
    #[tool(description = "Close a session opened with ask_guide. Its history is discarded and the id stops working.")]
    async fn close_session(
        &self,
        Parameters(params): Parameters<CloseSessionParams>,
    ) -> Result<String, String> {
        tracing::info!(session = %params.session_id, "close_session called");
        self.sessions
            .close(&params.session_id)
            .map_err(|e| e.to_string())?;
        Ok(serde_json::json!({
            "session_id": params.session_id,
            "status": "closed",
        })
        .to_string())
    }

    /// List the turns of a session.
    #[tool(description = "List the user and assistant turns of a session, oldest first.")]
    async fn session_history(
        &self,
        Parameters(params): Parameters<SessionHistoryParams>,
    ) -> Result<String, String> {
        let turns = self
            .sessions
            .history(&params.session_id)
            .map_err(|e| e.to_string())?;
        serde_json::to_string(&serde_json::json!({
            "session_id": params.session_id,
            "total": turns.len(),
            "turns": turns,
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// List the named entities the guide knows and the phrases that reach them.
    #[tool(description = "List the heritage sites, food spots and traditional foods the guide knows, with the phrases that name each one.")]
    async fn list_topics(
        &self,
        Parameters(params): Parameters<ListTopicsParams>,
    ) -> Result<String, String> {
        let topics = self
            .sessions
            .guide()
            .knowledge()
            .catalogue_named(params.group.as_deref())?;
        serde_json::to_string(&serde_json::json!({
            "topics": topics,
            "suggested_questions": crate::guide::suggested_questions(),
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for GuideTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "Binondo heritage guide. Use ask_guide to answer visitor questions, \
                 list_topics to see what it knows, clear_session to start over \
                 and close_session when a conversation is finished."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
