#![allow(dead_code)]

use jsonwebtoken::{EncodingKey, Header, encode};
use quizdesk::{config::Config, db, routes, state::AppState, utils::jwt::Claims};
use std::time::{SystemTime, UNIX_EPOCH};

/// Spawns the app on a random port against a fresh SQLite file.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app(jwt_secret: Option<&str>) -> String {
    let path = std::env::temp_dir().join(format!("quizdesk_test_{}.db", uuid::Uuid::new_v4()));

    let config = Config {
        database_url: format!("sqlite://{}", path.display()),
        jwt_secret: jwt_secret.map(str::to_string),
        rust_log: "error".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        max_connections: 5,
        admin_username: None,
        admin_email: None,
        admin_password: None,
    };

    let pool = db::connect(&config)
        .await
        .expect("Failed to open test database");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let state = AppState { pool, config };
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Signs a token the way the external issuer would.
pub fn mint_token(secret: &str, sub: i64, role: &str) -> String {
    let exp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() as usize + 600;
    let claims = Claims {
        sub: sub.to_string(),
        role: role.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().to_string()[..8])
}
