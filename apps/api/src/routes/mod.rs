pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::contact::handlers as contact;
use crate::embeds::handlers as embeds;
use crate::navigation::handlers as navigation;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", delete(session::handle_delete_session))
        // View / navigation
        .route("/api/v1/sessions/:id/view", get(navigation::handle_get_view))
        .route(
            "/api/v1/sessions/:id/view/navigate",
            post(navigation::handle_navigate),
        )
        .route("/api/v1/sessions/:id/view/enter", post(navigation::handle_enter))
        .route(
            "/api/v1/sessions/:id/view/menu",
            post(navigation::handle_toggle_menu),
        )
        .route(
            "/api/v1/sessions/:id/view/scroll",
            post(navigation::handle_scroll),
        )
        .route("/api/v1/sections/:section", get(navigation::handle_get_section))
        // Chat
        .route("/api/v1/sessions/:id/chat", get(chat::handle_get_chat))
        .route(
            "/api/v1/sessions/:id/chat/toggle",
            post(chat::handle_toggle_chat),
        )
        .route(
            "/api/v1/sessions/:id/chat/messages",
            post(chat::handle_submit),
        )
        .route("/api/v1/sessions/:id/chat/voice", post(chat::handle_voice))
        // Contact + embeds
        .route("/api/v1/contact", post(contact::handle_contact))
        .route("/api/v1/embeds", get(embeds::handle_list_embeds))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> (AppState, Router) {
        let state = AppState::new(Config::default());
        (state.clone(), build_router(state))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn new_session(app: &Router) -> String {
        let (status, json) = send(app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        json["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_, app) = app();
        let (status, json) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_new_session_starts_on_cover() {
        let (_, app) = app();
        let (_, json) = send(&app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(json["view"]["section"], "cover");
        assert_eq!(json["view"]["nav_items"], json!([]));
        assert_eq!(json["chat"]["open"], false);
    }

    #[tokio::test]
    async fn test_navigate_updates_view() {
        let (_, app) = app();
        let id = new_session(&app).await;

        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/view/navigate"),
            Some(json!({ "section": "skills" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["transition"]["exiting"], "cover");
        assert_eq!(json["transition"]["entering"], "skills");

        let (_, view) = send(&app, "GET", &format!("/api/v1/sessions/{id}/view"), None).await;
        assert_eq!(view["section"], "skills");
    }

    #[tokio::test]
    async fn test_unknown_section_is_rejected() {
        let (_, app) = app();
        let id = new_session(&app).await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/view/navigate"),
            Some(json!({ "section": "blog" })),
        )
        .await;
        assert!(status.is_client_error());

        let (status, _) = send(&app, "GET", "/api/v1/sections/blog", None).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_enter_and_menu_toggle() {
        let (_, app) = app();
        let id = new_session(&app).await;

        let (_, json) = send(&app, "POST", &format!("/api/v1/sessions/{id}/view/enter"), None).await;
        assert_eq!(json["view"]["section"], "contents");

        let (_, json) = send(&app, "POST", &format!("/api/v1/sessions/{id}/view/menu"), None).await;
        assert_eq!(json["menu_open"], true);

        let (_, json) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/view/navigate"),
            Some(json!({ "section": "about" })),
        )
        .await;
        assert_eq!(json["view"]["menu_open"], false);
    }

    #[tokio::test]
    async fn test_scroll_shows_scroll_top_after_cover() {
        let (_, app) = app();
        let id = new_session(&app).await;
        send(&app, "POST", &format!("/api/v1/sessions/{id}/view/enter"), None).await;

        let (_, json) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/view/scroll"),
            Some(json!({ "offset": 900.0 })),
        )
        .await;
        assert_eq!(json["show_scroll_top"], true);
    }

    #[tokio::test]
    async fn test_section_content() {
        let (_, app) = app();
        let (status, json) = send(&app, "GET", "/api/v1/sections/projects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["section"], "projects");
        assert_eq!(json["projects"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let (_, app) = app();
        let (status, json) = send(
            &app,
            "GET",
            "/api/v1/sessions/00000000-0000-0000-0000-000000000000/view",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_blank_chat_submit_is_ignored() {
        let (_, app) = app();
        let id = new_session(&app).await;
        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/chat/messages"),
            Some(json!({ "text": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["messages"], json!([]));
    }

    #[tokio::test]
    async fn test_chat_submit_appends_user_and_bot_messages() {
        let (_, app) = app();
        let id = new_session(&app).await;
        send(&app, "POST", &format!("/api/v1/sessions/{id}/chat/toggle"), None).await;
        let (_, json) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/chat/messages"),
            Some(json!({ "text": "What are your skills?" })),
        )
        .await;
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["sender"], "bot");
        assert_eq!(messages[1]["sender"], "user");
        assert_eq!(messages[2]["sender"], "bot");
        assert_eq!(json["status"], "typing");
    }

    #[tokio::test]
    async fn test_chat_submit_while_closed_is_ignored() {
        let (_, app) = app();
        let id = new_session(&app).await;
        let (status, json) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/chat/messages"),
            Some(json!({ "text": "What are your skills?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["open"], false);
        assert_eq!(json["messages"], json!([]));
    }

    #[tokio::test]
    async fn test_chat_toggle_open_then_close_discards() {
        let (_, app) = app();
        let id = new_session(&app).await;

        let (_, json) = send(&app, "POST", &format!("/api/v1/sessions/{id}/chat/toggle"), None).await;
        assert_eq!(json["open"], true);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);

        let (_, json) = send(&app, "POST", &format!("/api/v1/sessions/{id}/chat/toggle"), None).await;
        assert_eq!(json["open"], false);
        assert_eq!(json["messages"], json!([]));
    }

    #[tokio::test]
    async fn test_voice_transcript_is_submitted() {
        let (_, app) = app();
        let id = new_session(&app).await;
        send(&app, "POST", &format!("/api/v1/sessions/{id}/chat/toggle"), None).await;
        let (_, json) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/chat/voice"),
            Some(json!({ "transcript": "how do I contact you" })),
        )
        .await;
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages[1]["text"], "how do I contact you");
        assert_eq!(json["status"], "typing");
    }

    #[tokio::test]
    async fn test_contact_returns_whatsapp_redirect() {
        let (_, app) = app();
        let (status, json) = send(
            &app,
            "POST",
            "/api/v1/contact",
            Some(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Let's talk"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["redirect_url"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/2349158547128?text="));
    }

    #[tokio::test]
    async fn test_contact_with_blank_field_is_400() {
        let (_, app) = app();
        let (status, json) = send(
            &app,
            "POST",
            "/api/v1/contact",
            Some(json!({ "name": "", "email": "a@b.c", "subject": "s", "message": "m" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_embeds_listed() {
        let (_, app) = app();
        let (status, json) = send(&app, "GET", "/api/v1/embeds", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["kind"], "chat_widget");
    }

    #[tokio::test]
    async fn test_delete_session() {
        let (state, app) = app();
        let id = new_session(&app).await;
        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.sessions.len().await, 0);

        let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{id}/chat"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
