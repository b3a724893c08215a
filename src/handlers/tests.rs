// src/handlers/tests.rs

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
    models::test::{CreateTestRequest, Test},
};

/// Creates a new test.
pub async fn create_test(
    State(pool): State<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<CreateTestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    let test: Test = session.insert(&payload).await?;
    session.commit().await?;

    tracing::info!(test_id = test.id, "Test created");

    Ok((StatusCode::CREATED, Json(test)))
}

pub async fn list_tests(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let tests: Vec<Test> = session.list().await?;

    Ok(Json(tests))
}

pub async fn get_test(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let test: Test = session.get_by_id(id).await?;

    Ok(Json(test))
}

/// Deletes a test. Its questions, their answers and its results go with it.
pub async fn delete_test(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    session.delete_cascading::<Test>(id).await?;
    session.commit().await?;

    tracing::info!(test_id = id, "Test deleted");

    Ok(StatusCode::NO_CONTENT)
}
