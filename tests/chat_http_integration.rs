//! Integration tests for the chat HTTP endpoints.
//!
//! Drives the full router (session middleware included) against the
//! in-memory store and the mock completion client.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use chat_relay::adapters::ai::MockCompletionClient;
use chat_relay::adapters::http::{chat_router, ChatAppState, SessionCookieConfig};
use chat_relay::adapters::storage::InMemoryConversationStore;
use chat_relay::application::SUMMARY_PROMPT;
use chat_relay::domain::conversation::Message;
use chat_relay::ports::{ConversationStore, ProviderError};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    state: ChatAppState,
    store: Arc<InMemoryConversationStore>,
    completion: MockCompletionClient,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(InMemoryConversationStore::new());
        let completion = MockCompletionClient::new();
        let state = ChatAppState::new(store.clone(), Arc::new(completion.clone()));
        Self {
            router: chat_router(state.clone(), SessionCookieConfig::default()),
            state,
            store,
            completion,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResponse::read(response).await
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> TestResponse {
        self.send(form_request(uri, form, cookie)).await
    }

    /// Loads the chat page as a new browser; returns the issued cookie.
    async fn open_page(&self) -> String {
        let page = self.get("/", None).await;
        assert_eq!(page.status, StatusCode::OK);
        page.cookie.expect("chat page issues a session cookie")
    }

    /// Opens the page and posts a first message; returns the browser's cookie.
    async fn start_chat(&self, message: &str) -> String {
        let cookie = self.open_page().await;
        let response = self
            .post_form("/new-chat", &format!("message={message}"), Some(&cookie))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        cookie
    }
}

fn form_request(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

struct TestResponse {
    status: StatusCode,
    cookie: Option<String>,
    body: String,
}

impl TestResponse {
    async fn read(response: Response) -> Self {
        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        Self {
            status,
            cookie,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

// =============================================================================
// New chat
// =============================================================================

#[tokio::test]
async fn first_message_creates_conversation_and_triggers_reply() {
    let app = TestApp::new();

    let response = app.post_form("/new-chat", "message=Hello", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(">Hello</div>"));
    assert!(response.body.contains(r#"hx-get="/get-gpt-response""#));
    assert!(response.body.contains(r#"hx-trigger="load""#));
    assert!(response.cookie.is_none());

    let conversations = app.store.list_all().await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].messages, vec![Message::user("Hello")]);
}

#[tokio::test]
async fn missing_message_field_is_rejected() {
    let app = TestApp::new();

    let response = app.post_form("/new-chat", "other=1", None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn user_text_is_escaped() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/new-chat",
            "message=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
            None,
        )
        .await;

    assert!(!response.body.contains("<script>"));
    assert!(response.body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

// =============================================================================
// Reply and summary
// =============================================================================

#[tokio::test]
async fn full_exchange_summarizes_once() {
    let app = TestApp::new();
    app.completion.push(Ok("Hi there!".to_string()));
    app.completion.push(Ok("Friendly greeting".to_string()));
    app.completion.push(Ok("Still here.".to_string()));

    let cookie = app.start_chat("Hello").await;

    let reply = app.get("/get-gpt-response", Some(&cookie)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains(">Hi there!</div>"));
    assert!(reply.body.contains(r#"hx-get="/load-history-button""#));

    let button = app.get("/load-history-button", Some(&cookie)).await;
    assert_eq!(button.status, StatusCode::OK);
    assert!(button.body.contains(">Friendly greeting</button>"));
    assert_eq!(
        app.completion.last_call().unwrap().messages.last(),
        Some(&Message::user(SUMMARY_PROMPT))
    );

    app.post_form("/new-chat", "message=Again", Some(&cookie))
        .await;
    let second = app.get("/get-gpt-response", Some(&cookie)).await;
    assert_eq!(second.body, "<div>Still here.</div>");

    let conversations = app.store.list_all().await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(
        conversations[0].messages,
        vec![
            Message::user("Hello"),
            Message::assistant("Hi there!"),
            Message::user("Again"),
            Message::assistant("Still here."),
        ]
    );
    assert_eq!(conversations[0].summary.as_deref(), Some("Friendly greeting"));
}

#[tokio::test]
async fn reply_without_active_chat_is_conflict() {
    let app = TestApp::new();

    let reply = app.get("/get-gpt-response", None).await;
    let summary = app.get("/load-history-button", None).await;

    assert_eq!(reply.status, StatusCode::CONFLICT);
    assert_eq!(reply.body, "<div>No active chat</div>");
    assert_eq!(summary.status, StatusCode::CONFLICT);
    assert_eq!(app.completion.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_is_internal_error() {
    let app = TestApp::new();
    app.completion
        .push(Err(ProviderError::network("connection reset")));
    let cookie = app.start_chat("Hello").await;

    let reply = app.get("/get-gpt-response", Some(&cookie)).await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body, "Internal Server Error");
    let conversations = app.store.list_all().await.unwrap();
    assert_eq!(conversations[0].messages, vec![Message::user("Hello")]);
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn history_lists_only_summarized_conversations() {
    let app = TestApp::new();
    app.completion.push(Ok("Hi".to_string()));
    app.completion.push(Ok("Greeting".to_string()));

    let summarized = app.start_chat("Hello").await;
    app.get("/get-gpt-response", Some(&summarized)).await;
    app.get("/load-history-button", Some(&summarized)).await;
    app.start_chat("Unsummarized").await;

    let history = app.get("/load-history-on-page-load", None).await;

    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body.matches("<button").count(), 1);
    assert!(history.body.contains(">Greeting</button>"));
}

#[tokio::test]
async fn empty_history_is_empty_body() {
    let app = TestApp::new();
    let history = app.get("/load-history-on-page-load", None).await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body, "");
}

// =============================================================================
// Load and clear
// =============================================================================

#[tokio::test]
async fn load_unknown_chat_is_not_found_fragment() {
    let app = TestApp::new();

    let missing = app
        .get(
            "/load-chat?chatId=00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    let malformed = app.get("/load-chat?chatId=nope", None).await;
    let absent = app.get("/load-chat", None).await;

    for response in [missing, malformed, absent] {
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "<div>No Chat found with the provided id</div>");
    }
}

#[tokio::test]
async fn load_chat_is_idempotent_and_resumes_conversation() {
    let app = TestApp::new();
    app.completion.push(Ok("Hi there!".to_string()));
    let first = app.start_chat("Hello").await;
    app.get("/get-gpt-response", Some(&first)).await;
    let id = app.store.list_all().await.unwrap()[0].id;

    let other = app.start_chat("Elsewhere").await;
    let uri = format!("/load-chat?chatId={id}");
    let once = app.get(&uri, Some(&other)).await;
    let twice = app.get(&uri, Some(&other)).await;

    assert_eq!(once.body, "<div>Hello</div><div>Hi there!</div>");
    assert_eq!(once.body, twice.body);

    app.post_form("/new-chat", "message=Continue", Some(&other))
        .await;
    let resumed = app.store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(resumed.messages.len(), 3);
    assert_eq!(resumed.messages[2], Message::user("Continue"));
}

#[tokio::test]
async fn clear_chat_starts_a_new_conversation_next_time() {
    let app = TestApp::new();
    let cookie = app.start_chat("Hello").await;

    let cleared = app.get("/clear-chat", Some(&cookie)).await;
    assert_eq!(cleared.body, r#"<div id="messages" class="messages"></div>"#);

    app.post_form("/new-chat", "message=Fresh", Some(&cookie))
        .await;

    let conversations = app.store.list_all().await.unwrap();
    assert_eq!(conversations.len(), 2);
    assert_ne!(conversations[0].id, conversations[1].id);
    assert_eq!(conversations[1].messages, vec![Message::user("Fresh")]);
}

// =============================================================================
// Sessions and routing
// =============================================================================

#[tokio::test]
async fn sessions_do_not_share_state() {
    let app = TestApp::new();
    let alice = app.start_chat("From Alice").await;
    let bob = app.start_chat("From Bob").await;
    assert_ne!(alice, bob);

    app.post_form("/new-chat", "message=Alice again", Some(&alice))
        .await;

    let conversations = app.store.list_all().await.unwrap();
    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[0].messages.len(), 2);
    assert_eq!(conversations[1].messages, vec![Message::user("From Bob")]);

    // A cleared session does not affect the other one.
    app.get("/clear-chat", Some(&alice)).await;
    app.completion.push(Ok("Hi Bob".to_string()));
    let reply = app.get("/get-gpt-response", Some(&bob)).await;
    assert_eq!(reply.status, StatusCode::OK);
}

#[tokio::test]
async fn cookieless_client_keeps_one_conversation() {
    let app = TestApp::new();
    app.completion.push(Ok("Hi there!".to_string()));

    let posted = app.post_form("/new-chat", "message=Hello", None).await;
    let reply = app.get("/get-gpt-response", None).await;

    assert_eq!(posted.status, StatusCode::OK);
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains(">Hi there!</div>"));

    app.post_form("/new-chat", "message=Again", None).await;
    let conversations = app.store.list_all().await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].messages.len(), 3);
    assert_eq!(app.state.sessions.len().await, 0);
}

#[tokio::test]
async fn lookups_without_a_registered_session_do_not_grow_registry() {
    let app = TestApp::new();

    for _ in 0..20 {
        app.get("/clear-chat", None).await;
        app.get("/get-gpt-response", None).await;

        let stranger = format!("chat_session={}", uuid::Uuid::new_v4());
        app.get("/clear-chat", Some(&stranger)).await;
        app.get("/get-gpt-response", Some(&stranger)).await;
        app.get("/load-history-button", Some(&stranger)).await;
        app.get("/load-chat?chatId=nope", Some(&stranger)).await;
    }

    assert_eq!(app.state.sessions.len().await, 0);
    assert_eq!(app.completion.call_count(), 0);
}

#[tokio::test]
async fn successful_load_registers_the_browser() {
    let app = TestApp::new();
    let id = app
        .store
        .create(vec![Message::user("Hello")])
        .await
        .unwrap();
    let stranger = format!("chat_session={}", uuid::Uuid::new_v4());

    let loaded = app
        .get(&format!("/load-chat?chatId={id}"), Some(&stranger))
        .await;
    assert_eq!(loaded.body, "<div>Hello</div>");
    assert_eq!(app.state.sessions.len().await, 1);

    app.completion.push(Ok("Welcome back".to_string()));
    let reply = app.get("/get-gpt-response", Some(&stranger)).await;
    assert_eq!(reply.status, StatusCode::OK);
    let resumed = app.store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(resumed.messages.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn overlapping_messages_in_one_session_are_each_stored_once() {
    let app = TestApp::new();
    let cookie = app.open_page().await;

    let post = |text: &'static str| {
        let router = app.router.clone();
        let request = form_request("/new-chat", &format!("message={text}"), Some(&cookie));
        tokio::spawn(async move { router.oneshot(request).await.unwrap().status() })
    };

    let (a, b, c, d) = tokio::join!(post("one"), post("two"), post("three"), post("four"));
    for status in [a, b, c, d] {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    let conversations = app.store.list_all().await.unwrap();
    assert_eq!(conversations.len(), 1);
    let stored = &conversations[0].messages;
    assert_eq!(stored.len(), 4);
    for text in ["one", "two", "three", "four"] {
        let count = stored
            .iter()
            .filter(|m| **m == Message::user(text))
            .count();
        assert_eq!(count, 1, "{text} stored {count} times");
    }
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let app = TestApp::new();

    let unknown = app.get("/foo", None).await;
    let wrong_method = app.post_form("/clear-chat", "", None).await;

    for response in [unknown, wrong_method] {
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "Not Found");
    }
}

#[tokio::test]
async fn index_serves_chat_page() {
    let app = TestApp::new();
    let page = app.get("/", None).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.cookie.unwrap().starts_with("chat_session="));
    assert!(page.body.contains(r#"class="chat-history""#));
    assert!(page.body.contains(r#"id="messages" class="messages""#));
}
