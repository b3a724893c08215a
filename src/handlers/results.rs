// src/handlers/results.rs

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
    models::result::{CreateResultRequest, TestResult},
};

/// Records a user's score on a test.
/// Both the user and the test must already exist.
pub async fn create_result(
    State(pool): State<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<CreateResultRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    let result: TestResult = session.insert(&payload).await?;
    session.commit().await?;

    tracing::info!(
        result_id = result.id,
        user_id = result.user_id,
        test_id = result.test_id,
        "Result recorded"
    );

    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn list_results(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let results: Vec<TestResult> = session.list().await?;

    Ok(Json(results))
}

pub async fn get_result(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let result: TestResult = session.get_by_id(id).await?;

    Ok(Json(result))
}

pub async fn delete_result(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    session.delete_cascading::<TestResult>(id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
