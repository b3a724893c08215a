// tests/access_policy_tests.rs

mod common;

use common::{mint_token, spawn_app};
use serde_json::{Value, json};

const SECRET: &str = "access_policy_test_secret";

#[tokio::test]
async fn missing_token_is_401() {
    let address = spawn_app(Some(SECRET)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/tests", address))
        .json(&json!({"title": "T", "description": "d"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Missing bearer token");
}

#[tokio::test]
async fn forged_token_is_401() {
    let address = spawn_app(Some(SECRET)).await;
    let client = reqwest::Client::new();
    let token = mint_token("some_other_secret", 1, "admin");

    let response = client
        .get(format!("{}/tests", address))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn health_stays_open() {
    let address = spawn_app(Some(SECRET)).await;

    let response = reqwest::get(format!("{}/health", address)).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn authenticated_user_manages_quiz_content() {
    let address = spawn_app(Some(SECRET)).await;
    let client = reqwest::Client::new();
    let token = mint_token(SECRET, 2, "user");

    let response = client
        .post(format!("{}/tests", address))
        .bearer_auth(&token)
        .json(&json!({"title": "Lifetimes", "description": "'a and friends"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let test: Value = response.json().await.unwrap();

    let response = client
        .get(format!("{}/tests/{}", address, test["id"]))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn user_management_requires_admin() {
    let address = spawn_app(Some(SECRET)).await;
    let client = reqwest::Client::new();
    let payload = json!({"username": "alice", "email": "a@x.com", "password": "pw1"});

    // Regular user is authenticated but not allowed
    let response = client
        .post(format!("{}/users", address))
        .bearer_auth(mint_token(SECRET, 2, "user"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Admin role required");

    // Anonymous caller is rejected before the admin check
    let response = client
        .get(format!("{}/users", address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);

    // Admin goes through
    let admin = mint_token(SECRET, 1, "admin");
    let response = client
        .post(format!("{}/users", address))
        .bearer_auth(&admin)
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();

    let fetched: Value = client
        .get(format!("{}/users/{}", address, created["id"]))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}
