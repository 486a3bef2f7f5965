//! HTML fragments returned to the htmx front end.
//!
//! Every piece of user or model text passes through [`html_escape`] before it
//! is placed in markup, attributes included.

use crate::domain::conversation::Message;
use crate::domain::foundation::ConversationId;

/// Body returned by `/load-chat` when nothing can be shown.
pub const CHAT_NOT_FOUND: &str = "<div>No Chat found with the provided id</div>";

/// Empty message container returned by `/clear-chat`.
pub const EMPTY_MESSAGES: &str = r#"<div id="messages" class="messages"></div>"#;

/// Body returned when a reply or summary is requested with no active chat.
pub const NO_ACTIVE_CHAT: &str = "<div>No active chat</div>";

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// The user's message, which on load asks for the assistant reply.
pub fn pending_reply(message: &str) -> String {
    format!(
        r##"<div hx-trigger="load" hx-get="/get-gpt-response" hx-target=".messages" hx-indicator="#indicator" hx-swap="beforeend">{}</div>"##,
        html_escape(message)
    )
}

/// A plain assistant reply.
pub fn reply(content: &str) -> String {
    format!("<div>{}</div>", html_escape(content))
}

/// An assistant reply that, on load, asks for the conversation summary and
/// prepends the resulting button to the history list.
pub fn reply_with_summary_trigger(content: &str) -> String {
    format!(
        r#"<div hx-trigger="load" hx-get="/load-history-button" hx-target=".chat-history" hx-swap="afterbegin">{}</div>"#,
        html_escape(content)
    )
}

/// A history sidebar button that loads its conversation when clicked.
pub fn history_button(id: ConversationId, summary: &str) -> String {
    let summary = html_escape(summary);
    format!(
        r#"<button class="summary" hx-get="/load-chat" hx-trigger="click" hx-target=".messages" hx-swap="innerHTML" data-chat-id="{id}" hx-on='htmx:configRequest: event.detail.parameters.chatId = this.getAttribute("data-chat-id")' title="{summary}">{summary}</button>"#
    )
}

/// Every message of a conversation, one div each, oldest first.
pub fn messages(messages: &[Message]) -> String {
    messages.iter().map(|m| reply(m.content())).collect()
}
