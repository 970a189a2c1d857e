#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatMessage;

/// State for the chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A request is in flight; input is held until the reply lands.
    pub pending: bool,
}
