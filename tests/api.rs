use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use party_board::{app, state::AppState, store::SheetStore};

fn board(dir: &std::path::Path) -> Router {
    let state = AppState {
        store: Arc::new(SheetStore::open(dir).unwrap()),
    };
    app(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn unknown_action_is_a_structured_failure() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let (status, body) = get(&app, "/api?action=definitely-not-real").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unknown action");

    let (_, body) = get(&app, "/api").await;
    assert_eq!(body["error"], "Unknown action");
}

#[tokio::test]
async fn rsvp_requires_guest_name_and_status() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let (status, body) = get(&app, "/api?action=rsvp&guest=g1&name=Ann").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required fields");

    // empty counts as missing
    let (_, body) = get(&app, "/api?action=rsvp&guest=g1&name=Ann&status=").await;
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn validate_rejects_unknown_guests() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let (status, body) = get(&app, "/api?action=validate&guest=nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invalid guest ID");

    let (_, body) = get(&app, "/api?action=validate").await;
    assert_eq!(body["error"], "Guest ID is required");
}

#[tokio::test]
async fn rsvp_then_validate_and_init() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let (status, body) = get(
        &app,
        "/api?action=rsvp&guest=g1&name=Ann&status=yes&plusOne=true&showPublic=true",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["guests"].as_array().unwrap().len(), 1);
    assert_eq!(body["guests"][0]["guestId"], "g1");
    assert_eq!(body["guests"][0]["plusOne"], true);

    let (_, body) = get(&app, "/api?action=validate&guest=g1").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["guest"]["name"], "Ann");

    let (_, body) = get(&app, "/api?action=init&guest=g1").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["rsvp"]["status"], "yes");
    assert_eq!(body["rsvp"]["showPublic"], true);
    assert_eq!(body["myLikes"].as_array().unwrap().len(), 0);
    assert_eq!(body["topics"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn init_with_unknown_guest_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let (status, body) = get(&app, "/api?action=init&guest=stranger").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["rsvp"].is_null());
    assert_eq!(body["guests"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn topics_expose_a_count_never_the_like_members() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let (_, body) = get(
        &app,
        "/api?action=topic&guest=g1&authorName=Ann&text=Bring%20a%20gift%3F",
    )
    .await;
    assert_eq!(body["success"], true);
    let topic = &body["topics"][0];
    assert_eq!(topic["text"], "Bring a gift?");
    assert_eq!(topic["author"], "Ann");
    assert_eq!(topic["likesCount"], 0);

    let keys: Vec<&String> = topic.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    assert!(!keys.iter().any(|k| k.as_str() == "likes"));

    let topic_id = topic["id"].as_str().unwrap().to_string();

    // like twice: still counted once
    let uri = format!("/api?action=like&guest=g2&topicId={topic_id}");
    let (_, body) = get(&app, &uri).await;
    assert_eq!(body["topics"][0]["likesCount"], 1);
    let (_, body) = get(&app, &uri).await;
    assert_eq!(body["topics"][0]["likesCount"], 1);

    let (_, body) = get(&app, "/api?action=init&guest=g2").await;
    assert_eq!(body["myLikes"][0], topic_id);

    // unlike, then unlike again: back to zero and stays there
    let uri = format!("/api?action=like&guest=g2&topicId={topic_id}&unlike=true");
    let (_, body) = get(&app, &uri).await;
    assert_eq!(body["topics"][0]["likesCount"], 0);
    let (_, body) = get(&app, &uri).await;
    assert_eq!(body["topics"][0]["likesCount"], 0);
}

#[tokio::test]
async fn liking_an_unknown_topic_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let (status, body) = get(&app, "/api?action=like&guest=g1&topicId=missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Topic not found");
}

#[tokio::test]
async fn posting_a_topic_twice_duplicates_it() {
    let dir = tempfile::tempdir().unwrap();
    let app = board(dir.path());

    let uri = "/api?action=topic&guest=g1&authorName=Ann&text=hello";
    let (_, _) = get(&app, uri).await;
    let (_, body) = get(&app, uri).await;

    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 2);
    assert_ne!(topics[0]["id"], topics[1]["id"]);
}

#[tokio::test]
async fn state_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = board(dir.path());
        get(
            &app,
            "/api?action=rsvp&guest=g1&name=Ann&status=attending&plusOne=true",
        )
        .await;
    }

    let app = board(dir.path());
    let (_, body) = get(&app, "/api?action=init&guest=g1").await;
    assert_eq!(body["rsvp"]["status"], "attending");
    assert_eq!(body["rsvp"]["plusOne"], true);
    assert_eq!(body["rsvp"]["showPublic"], false);
}
