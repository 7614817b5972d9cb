//! Conversation state, owned explicitly rather than through any global.
//!
//! - [`Conversation`]: one ordered, append-only list of turns with `submit`/`clear`
//! - [`SessionStore`]: conversations keyed by session id, for multi-user servers
//! - [`transcript`]: Markdown and JSON export of a conversation

mod conversation;
mod store;
pub mod transcript;

pub use conversation::{Conversation, ConversationState, Role, Turn};
pub use store::{Answer, SessionError, SessionStore, DEFAULT_MAX_SESSIONS};
