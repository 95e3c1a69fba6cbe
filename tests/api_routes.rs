//! Router tests driven through `tower::ServiceExt::oneshot`.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cosmic_guide::{
    advisor::Advisor,
    api::{create_router, ApiResponse, ApiState},
    config::GeminiConfig,
    session::{InMemorySessionStore, WELCOME_MESSAGE},
};
use common::{start_mock_server, MockState, OK_BODY};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn test_router() -> Router {
    router_for(GeminiConfig::default(), None)
}

fn router_for(gemini: GeminiConfig, default_api_key: Option<&str>) -> Router {
    let state = ApiState {
        advisor: Arc::new(Advisor::new(&gemini).unwrap()),
        sessions: Arc::new(InMemorySessionStore::new()),
        default_api_key: default_api_key.map(str::to_string),
    };
    create_router(state)
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, ApiResponse) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_chat_without_key_answers_locally() {
    let router = test_router();

    let (status, response) = send(
        &router,
        "POST",
        "/api/chat",
        Some(json!({ "chat_id": "stargazer", "question": "Should I change my job?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.success);
    let data = response.data.unwrap();
    assert_eq!(data["source"], "local");
    assert_eq!(data["category"], "career");
    assert!(!data["answer"].as_str().unwrap().is_empty());

    // history holds welcome, question, answer
    let (status, history) = send(&router, "GET", "/api/chat/stargazer", None).await;
    assert_eq!(status, StatusCode::OK);
    let messages = history.data.unwrap()["messages"].as_array().unwrap().clone();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["content"], WELCOME_MESSAGE);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[2]["role"], "guide");
}

#[tokio::test]
async fn test_blank_question_rejected() {
    let (status, response) = send(
        &test_router(),
        "POST",
        "/api/chat",
        Some(json!({ "question": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!response.success);
}

#[tokio::test]
async fn test_unknown_chat_is_404() {
    let (status, _) = send(&test_router(), "GET", "/api/chat/never-seen", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_is_stored_on_session() {
    let router = test_router();

    let (status, _) = send(
        &router,
        "PUT",
        "/api/profile/stargazer",
        Some(json!({
            "dateOfBirth": "1990-04-12",
            "birthTime": "06:30",
            "location": "Pune, India",
            "gender": "female"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, history) = send(&router, "GET", "/api/chat/stargazer", None).await;
    let data = history.data.unwrap();
    assert_eq!(data["profile"]["location"], "Pune, India");
}

#[tokio::test]
async fn test_classify_endpoint() {
    let (status, response) = send(
        &test_router(),
        "POST",
        "/api/classify",
        Some(json!({ "question": "How can I heal?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.data.unwrap()["category"], "personal");
}

fn sample_profile() -> Value {
    json!({
        "dateOfBirth": "1984-09-30",
        "birthTime": "14:05",
        "location": "Valparaiso, Chile",
        "gender": "male"
    })
}

#[tokio::test]
async fn test_chat_profile_is_stored_and_reused() {
    let mock = MockState::new(StatusCode::OK, OK_BODY);
    let base_url = start_mock_server(mock.clone()).await;
    let router = router_for(GeminiConfig::default().with_base_url(base_url), None);

    let (status, first) = send(
        &router,
        "POST",
        "/api/chat",
        Some(json!({
            "chat_id": "harbor",
            "question": "Will I find love?",
            "api_key": "user-key",
            "profile": sample_profile()
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first.data.unwrap()["source"], "gemini");

    // second turn carries no profile; the stored one reaches the prompt
    let (status, _) = send(
        &router,
        "POST",
        "/api/chat",
        Some(json!({
            "chat_id": "harbor",
            "question": "And my career?",
            "api_key": "user-key"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].prompt().contains("Birth Location: Valparaiso, Chile"));
    assert!(requests[1].prompt().contains("Question: \"And my career?\""));

    let (_, history) = send(&router, "GET", "/api/chat/harbor", None).await;
    assert_eq!(history.data.unwrap()["profile"]["birthTime"], "14:05");
}

#[tokio::test]
async fn test_default_key_used_when_request_has_none() {
    let mock = MockState::new(StatusCode::OK, OK_BODY);
    let base_url = start_mock_server(mock.clone()).await;
    let router = router_for(
        GeminiConfig::default().with_base_url(base_url),
        Some("server-key"),
    );

    for body in [
        json!({ "question": "Will I find love?" }),
        json!({ "question": "Will I find love?", "api_key": "   " }),
    ] {
        let (status, response) = send(&router, "POST", "/api/chat", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.data.unwrap()["answer"], "Venus smiles on you this month.");
    }

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|r| r.key.as_deref() == Some("server-key")));
}

#[tokio::test]
async fn test_concurrent_turns_and_profile_update_are_all_kept() {
    let mock = MockState::new(StatusCode::OK, OK_BODY).with_delay(Duration::from_millis(300));
    let base_url = start_mock_server(mock).await;
    let router = router_for(GeminiConfig::default().with_base_url(base_url), None);

    let ask = |question: &'static str| {
        let router = router.clone();
        async move {
            send(
                &router,
                "POST",
                "/api/chat",
                Some(json!({ "chat_id": "race", "question": question, "api_key": "k" })),
            )
            .await
        }
    };
    let update_profile = {
        let router = router.clone();
        async move {
            // land while both remote calls are in flight
            tokio::time::sleep(Duration::from_millis(100)).await;
            send(&router, "PUT", "/api/profile/race", Some(sample_profile())).await
        }
    };

    let (a, b, p) = tokio::join!(
        ask("Will I find love?"),
        ask("Should I change my job?"),
        update_profile
    );
    assert_eq!(a.0, StatusCode::OK);
    assert_eq!(b.0, StatusCode::OK);
    assert_eq!(p.0, StatusCode::OK);

    let (_, history) = send(&router, "GET", "/api/chat/race", None).await;
    let data = history.data.unwrap();
    assert_eq!(data["messages"].as_array().unwrap().len(), 5);
    assert_eq!(data["profile"]["location"], "Valparaiso, Chile");
}
