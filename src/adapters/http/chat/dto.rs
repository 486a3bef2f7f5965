//! Request payloads for chat endpoints.

use serde::Deserialize;

/// Form body of `POST /new-chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewChatForm {
    pub message: String,
}

/// Query string of `GET /load-chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadChatParams {
    #[serde(rename = "chatId")]
    pub chat_id: Option<String>,
}
