// src/models/answer.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};
use validator::Validate;

use crate::{
    db::{Record, ensure_exists},
    error::AppError,
    models::question::Question,
};

/// Represents the 'answers' table in the database.
/// One of the candidate answers to a question.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,

    /// Whether picking this answer is correct.
    pub is_correct: bool,
}

#[async_trait]
impl Record for Answer {
    const TABLE: &'static str = "answers";
    const COLUMNS: &'static str = "id, question_id, text, is_correct";
    const LABEL: &'static str = "Answer";

    type Create = CreateAnswerRequest;

    async fn insert(
        conn: &mut SqliteConnection,
        new: &CreateAnswerRequest,
    ) -> Result<Self, AppError> {
        ensure_exists::<Question>(conn, new.question_id, "question_id").await?;

        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (question_id, text, is_correct)
            VALUES (?, ?, ?)
            RETURNING id, question_id, text, is_correct
            "#,
        )
        .bind(new.question_id)
        .bind(&new.text)
        .bind(new.is_correct)
        .fetch_one(conn)
        .await?;

        Ok(answer)
    }
}

/// DTO for creating a new answer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    pub question_id: i64,
    #[validate(length(min = 1, message = "Answer text must not be empty."))]
    pub text: String,
    pub is_correct: bool,
}
