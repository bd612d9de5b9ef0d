//! HTTP API integration tests
//!
//! Each test stands up the full router on an ephemeral port with a fresh
//! temporary database and drives it over real HTTP with reqwest.

use serde_json::{json, Value};
use tempfile::TempDir;

use taskboard::db::{create_pool, run_migrations};
use taskboard::server::server::{create_router, AppState};

async fn spawn_server() -> (String, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("taskboard.db");

    let pool = create_pool(&db_path).await.unwrap();
    run_migrations(&pool).await.unwrap();

    let app = create_router(AppState { pool });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), temp_dir)
}

async fn create_task(client: &reqwest::Client, base: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/api/tasks", base))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn list_tasks(client: &reqwest::Client, base: &str, deleted: bool) -> Vec<Value> {
    let url = if deleted {
        format!("{}/api/tasks/deleted", base)
    } else {
        format!("{}/api/tasks", base)
    };
    let response = client.get(url).send().await.unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/health", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "taskboard");
}

#[tokio::test]
async fn test_root_serves_client() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("<title>Taskboard</title>"));
}

#[tokio::test]
async fn test_create_then_list_active() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = create_task(&client, &base, json!({"text": "Buy milk"})).await;
    assert_eq!(response.status(), 201);

    let task: Value = response.json().await.unwrap();
    assert_eq!(task["text"], "Buy milk");
    assert_eq!(task["completed"], false);
    assert_eq!(task["is_deleted"], false);
    assert!(task["id"].is_i64());

    let active = list_tasks(&client, &base, false).await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0], task);
}

#[tokio::test]
async fn test_create_honors_completed_flag() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let response =
        create_task(&client, &base, json!({"text": "Pre-done", "completed": true})).await;
    assert_eq!(response.status(), 201);

    let task: Value = response.json().await.unwrap();
    assert_eq!(task["completed"], true);
}

#[tokio::test]
async fn test_create_rejects_missing_or_blank_text() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({"text": ""}), json!({"text": "   "})] {
        let response = create_task(&client, &base, body).await;
        assert_eq!(response.status(), 400);

        let error: Value = response.json().await.unwrap();
        assert!(error["error"].is_string());
    }

    // No record was created by any of the rejected requests
    let active = list_tasks(&client, &base, false).await;
    assert!(active.is_empty());
}

#[tokio::test]
async fn test_lists_are_newest_first() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    for text in ["first", "second", "third"] {
        create_task(&client, &base, json!({"text": text})).await;
    }

    let active = list_tasks(&client, &base, false).await;
    let texts: Vec<&str> = active.iter().map(|t| t["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_get_single_task() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(&client, &base, json!({"text": "Fetch me"}))
        .await
        .json()
        .await
        .unwrap();

    let response = client
        .get(format!("{}/api/tasks/{}", base, task["id"]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, task);

    let response = client
        .get(format!("{}/api/tasks/999", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_update_with_empty_body_is_rejected() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(&client, &base, json!({"text": "Untouched"}))
        .await
        .json()
        .await
        .unwrap();

    let response = client
        .put(format!("{}/api/tasks/{}", base, task["id"]))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Nothing was mutated
    let active = list_tasks(&client, &base, false).await;
    assert_eq!(active[0], task);
}

#[tokio::test]
async fn test_update_nonexistent_task_is_404() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{}/api/tasks/12345", base))
        .json(&json!({"completed": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let error: Value = response.json().await.unwrap();
    assert!(error["error"].as_str().unwrap().contains("12345"));
}

#[tokio::test]
async fn test_update_is_a_sparse_patch() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(&client, &base, json!({"text": "Buy milk"}))
        .await
        .json()
        .await
        .unwrap();

    let response = client
        .put(format!("{}/api/tasks/{}", base, task["id"]))
        .json(&json!({"completed": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["text"], "Buy milk");
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["is_deleted"], false);
}

#[tokio::test]
async fn test_update_rejects_blank_text() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(&client, &base, json!({"text": "Keep me"}))
        .await
        .json()
        .await
        .unwrap();

    let response = client
        .put(format!("{}/api/tasks/{}", base, task["id"]))
        .json(&json!({"text": "  "}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_soft_delete_moves_between_views() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(
        &client,
        &base,
        json!({"text": "Trash me", "completed": true}),
    )
    .await
    .json()
    .await
    .unwrap();

    let response = client
        .delete(format!("{}/api/tasks/{}", base, task["id"]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let trashed: Value = response.json().await.unwrap();
    assert_eq!(trashed["id"], task["id"]);
    assert_eq!(trashed["text"], "Trash me");
    assert_eq!(trashed["completed"], true);
    assert_eq!(trashed["is_deleted"], true);

    assert!(list_tasks(&client, &base, false).await.is_empty());
    assert_eq!(list_tasks(&client, &base, true).await, vec![trashed]);
}

#[tokio::test]
async fn test_restore_reverses_soft_delete() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(&client, &base, json!({"text": "Round trip"}))
        .await
        .json()
        .await
        .unwrap();

    client
        .delete(format!("{}/api/tasks/{}", base, task["id"]))
        .send()
        .await
        .unwrap();

    let response = client
        .put(format!("{}/api/tasks/{}", base, task["id"]))
        .json(&json!({"is_deleted": false}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let restored: Value = response.json().await.unwrap();
    assert_eq!(restored, task);

    assert!(list_tasks(&client, &base, true).await.is_empty());
    assert_eq!(list_tasks(&client, &base, false).await, vec![restored]);
}

#[tokio::test]
async fn test_soft_delete_nonexistent_task_is_404() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{}/api/tasks/9999", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_permanent_delete_removes_the_record() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(&client, &base, json!({"text": "Doomed"}))
        .await
        .json()
        .await
        .unwrap();
    let id = task["id"].as_i64().unwrap();

    client
        .delete(format!("{}/api/tasks/{}", base, id))
        .send()
        .await
        .unwrap();

    let response = client
        .delete(format!("{}/api/tasks/permanent/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
    assert!(response.bytes().await.unwrap().is_empty());

    assert!(list_tasks(&client, &base, true).await.is_empty());

    // Every follow-up operation on the purged id is a 404
    let response = client
        .put(format!("{}/api/tasks/{}", base, id))
        .json(&json!({"completed": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{}/api/tasks/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{}/api/tasks/permanent/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_permanent_delete_works_on_active_tasks() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let task: Value = create_task(&client, &base, json!({"text": "Still active"}))
        .await
        .json()
        .await
        .unwrap();

    let response = client
        .delete(format!("{}/api/tasks/permanent/{}", base, task["id"]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    assert!(list_tasks(&client, &base, false).await.is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_404_with_error_body() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/nope", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

/// Full lifecycle walk: create, complete, trash, restore, purge.
#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let (base, _guard) = spawn_server().await;
    let client = reqwest::Client::new();

    // Create on a fresh database: first id is 1
    let task: Value = create_task(&client, &base, json!({"text": "Buy milk"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(
        task,
        json!({"id": 1, "text": "Buy milk", "completed": false, "is_deleted": false})
    );

    // Complete it
    let task: Value = client
        .put(format!("{}/api/tasks/1", base))
        .json(&json!({"completed": true}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        task,
        json!({"id": 1, "text": "Buy milk", "completed": true, "is_deleted": false})
    );

    // Soft delete
    let task: Value = client
        .delete(format!("{}/api/tasks/1", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        task,
        json!({"id": 1, "text": "Buy milk", "completed": true, "is_deleted": true})
    );
    assert!(list_tasks(&client, &base, false).await.is_empty());

    // Restore
    let task: Value = client
        .put(format!("{}/api/tasks/1", base))
        .json(&json!({"is_deleted": false}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(task["is_deleted"], false);
    assert_eq!(list_tasks(&client, &base, false).await.len(), 1);

    // Purge
    let response = client
        .delete(format!("{}/api/tasks/permanent/1", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .put(format!("{}/api/tasks/1", base))
        .json(&json!({"completed": false}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
