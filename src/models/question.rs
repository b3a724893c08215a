// src/models/question.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};
use validator::Validate;

use crate::{
    db::{Record, ensure_exists},
    error::AppError,
    models::test::Test,
};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: i64,

    /// Owning test. Deleting the test removes the question.
    pub test_id: i64,

    /// The text content of the question.
    pub text: String,
}

#[async_trait]
impl Record for Question {
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static str = "id, test_id, text";
    const LABEL: &'static str = "Question";

    type Create = CreateQuestionRequest;

    async fn insert(
        conn: &mut SqliteConnection,
        new: &CreateQuestionRequest,
    ) -> Result<Self, AppError> {
        ensure_exists::<Test>(conn, new.test_id, "test_id").await?;

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (test_id, text)
            VALUES (?, ?)
            RETURNING id, test_id, text
            "#,
        )
        .bind(new.test_id)
        .bind(&new.text)
        .fetch_one(conn)
        .await?;

        Ok(question)
    }
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub test_id: i64,
    #[validate(length(min = 1, message = "Question text must not be empty."))]
    pub text: String,
}
