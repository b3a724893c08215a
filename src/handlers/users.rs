// src/handlers/users.rs

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    db::Session,
    error::AppError,
    extract::{ValidatedJson, ValidatedPath},
    models::user::{CreateUserRequest, NewUser, User, UserResponse},
    utils::hash::hash_password,
};

/// Creates a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created and the user object (excluding password).
pub async fn create_user(
    State(pool): State<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = NewUser {
        username: payload.username,
        email: payload.email,
        is_admin: payload.is_admin,
        password_hash: hash_password(&payload.password)?,
    };

    let mut session = Session::acquire_write(&pool).await?;
    let user: User = session.insert(&new_user).await.inspect_err(|e| {
        tracing::warn!(username = %new_user.username, "Failed to create user: {}", e);
    })?;
    session.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Lists all users, ordered by id.
pub async fn list_users(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let users: Vec<User> = session.list().await?;

    Ok(Json(
        users.into_iter().map(UserResponse::from).collect::<Vec<_>>(),
    ))
}

/// Retrieves a single user by ID.
pub async fn get_user(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let user: User = session.get_by_id(id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Deletes a user by ID together with their results.
pub async fn delete_user(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    session.delete_cascading::<User>(id).await?;
    session.commit().await?;

    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
