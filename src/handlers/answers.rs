// src/handlers/answers.rs

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
    models::answer::{CreateAnswerRequest, Answer},
};

pub async fn create_answer(
    State(pool): State<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<CreateAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    let answer: Answer = session.insert(&payload).await?;
    session.commit().await?;

    tracing::info!(answer_id = answer.id, question_id = answer.question_id, "Answer created");

    Ok((StatusCode::CREATED, Json(answer)))
}

pub async fn list_answers(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let answers: Vec<Answer> = session.list().await?;

    Ok(Json(answers))
}

pub async fn get_answer(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire(&pool).await?;
    let answer: Answer = session.get_by_id(id).await?;

    Ok(Json(answer))
}

pub async fn delete_answer(
    State(pool): State<SqlitePool>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = Session::acquire_write(&pool).await?;
    session.delete_cascading::<Answer>(id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
