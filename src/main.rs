// src/main.rs

use dotenvy::dotenv;
use quizdesk::config::Config;
use quizdesk::db::{self, MIGRATOR, Session};
use quizdesk::models::user::{NewUser, User};
use quizdesk::routes;
use quizdesk::state::AppState;
use quizdesk::utils::hash::{hash_password, verify_password};
use sqlx::SqlitePool;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "quizdesk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Initialize Database Pool with Retry
    let mut retry_count = 0;
    let pool = loop {
        match db::connect(&config).await {
            Ok(pool) => break pool,
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    tracing::error!("Failed to connect to database after 5 retries: {}", e);
                    return Err(e.into());
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    };

    tracing::info!("Database connected...");

    // Run Migrations Automatically
    tracing::info!("Running migrations...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrations applied successfully.");

    // Seed Admin User
    if let Err(e) = seed_admin_user(&pool, &config).await {
        tracing::error!("Failed to seed admin user: {:?}", e);
    }

    if config.access_policy_enabled() {
        tracing::info!("Access policy enabled: bearer token required");
    } else {
        tracing::warn!("JWT_SECRET not set: all routes are open");
    }

    let addr = config.bind_addr.clone();
    let state = AppState { pool, config };

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed_admin_user(pool: &SqlitePool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        return Ok(());
    };

    let existing: Option<String> =
        sqlx::query_scalar("SELECT password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

    if let Some(stored_hash) = existing {
        if !verify_password(password, &stored_hash)? {
            tracing::warn!("Admin user '{}' exists with a different password; leaving it unchanged", username);
        }
        return Ok(());
    }

    tracing::info!("Seeding admin user: {}", username);
    let new_user = NewUser {
        username: username.clone(),
        email: config
            .admin_email
            .clone()
            .unwrap_or_else(|| format!("{}@localhost", username)),
        is_admin: true,
        password_hash: hash_password(password)?,
    };

    let mut session = Session::acquire_write(pool).await?;
    let user: User = session.insert(&new_user).await?;
    session.commit().await?;
    tracing::info!(user_id = user.id, "Admin user created successfully.");

    Ok(())
}
