use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::comment::repository::mock::MockCommentRepository;
use service::comment::CommentService;

struct TestApp {
    base_url: String,
}

/// Spin up the full HTTP stack over an in-memory repository on an ephemeral
/// port; the transport contract is identical to the database-backed server.
async fn start_server() -> anyhow::Result<TestApp> {
    let repo = Arc::new(MockCommentRepository::default());
    let state = ServerState { comments: Arc::new(CommentService::new(repo)) };

    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health_is_alive_and_json() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("application/json"));
    assert!(content_type.contains("charset=UTF-8"));
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "I am Alive");
    Ok(())
}

#[tokio::test]
async fn e2e_comment_crud_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Empty store lists an empty array, not an error
    let res = c.get(format!("{}/api/comment", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!([]));

    // Create
    let res = c
        .post(format!("{}/api/comment", app.base_url))
        .json(&json!({"slug": "post-1", "body": "nice post", "author": "alice"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["body"], "nice post");
    let id = created["id"].as_i64().expect("created id must be numeric");
    assert!(id > 0);

    // Read back by assigned id
    let res = c.get(format!("{}/api/comment/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let read = res.json::<serde_json::Value>().await?;
    assert_eq!(read["slug"], "post-1");
    assert_eq!(read["author"], "alice");

    // Full replace via PUT
    let res = c
        .put(format!("{}/api/comment/{}", app.base_url, id))
        .json(&json!({"slug": "post-1", "body": "edited", "author": "bob"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["body"], "edited");
    assert_eq!(updated["author"], "bob");
    assert_eq!(updated["id"], json!(id));

    // List now has exactly one element
    let res = c.get(format!("{}/api/comment", app.base_url)).send().await?;
    let list = res.json::<serde_json::Value>().await?;
    assert_eq!(list.as_array().map(|a| a.len()), Some(1));

    // Delete, confirmed by envelope
    let res = c.delete(format!("{}/api/comment/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Successfully deleted comment");

    // Deleted id is gone
    let res = c.get(format!("{}/api/comment/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_unparsable_id_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for req in [
        c.get(format!("{}/api/comment/abc", app.base_url)),
        c.put(format!("{}/api/comment/abc", app.base_url))
            .json(&json!({"slug": "s", "body": "b", "author": "a"})),
        c.delete(format!("{}/api/comment/-1", app.base_url)),
    ] {
        let res = req.send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["message"], "Unable to parse comment ID");
        assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn e2e_missing_comment_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api/comment/9999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Not JSON at all
    let res = c
        .post(format!("{}/api/comment", app.base_url))
        .header(CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Failed to decode JSON body");

    // Well-formed JSON, ill-formed comment
    let res = c
        .post(format!("{}/api/comment", app.base_url))
        .json(&json!({"slug": "s", "body": "   ", "author": "a"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_client_supplied_id_and_timestamps_are_ignored() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/comment", app.base_url))
        .json(&json!({
            "id": 777,
            "slug": "post-2",
            "body": "hello",
            "author": "carol",
            "created_at": "1999-01-01T00:00:00Z"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_ne!(created["id"], json!(777));
    Ok(())
}
