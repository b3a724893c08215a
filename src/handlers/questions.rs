// src/handlers/questions.rs

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
    models::question::{CreateQuestionRequest, Question},
};

/// Adds a question to an existing test.
/// A `test_id` with no matching test is rejected with 409.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    let question: Question = session.insert(&payload).await?;
    session.commit().await?;

    tracing::info!(question_id = question.id, test_id = question.test_id, "Question created");

    Ok((StatusCode::CREATED, Json(question)))
}

pub async fn list_questions(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let questions: Vec<Question> = session.list().await?;

    Ok(Json(questions))
}

pub async fn get_question(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let question: Question = session.get_by_id(id).await?;

    Ok(Json(question))
}

/// Deletes a question and its answers.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    session.delete_cascading::<Question>(id).await?;
    session.commit().await?;

    tracing::info!(question_id = id, "Question deleted");

    Ok(StatusCode::NO_CONTENT)
}
