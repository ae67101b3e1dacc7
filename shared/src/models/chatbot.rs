//! Chatbot exchange (`POST /chatbot`)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(alias = "response", alias = "answer", alias = "message")]
    pub reply: String,
}
