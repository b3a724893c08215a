// src/models/user.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};
use validator::Validate;

use crate::{db::Record, error::AppError};

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Unique email address.
    pub email: String,

    pub is_admin: bool,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,
}

/// Row values for a new user. The password is already hashed.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub password_hash: String,
}

#[async_trait]
impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, username, email, is_admin, password";
    const LABEL: &'static str = "User";

    type Create = NewUser;

    async fn insert(conn: &mut SqliteConnection, new: &NewUser) -> Result<Self, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, is_admin, password)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, email, is_admin, password
            "#,
        )
        .bind(&new.username)
        .bind(&new.email)
        .bind(new.is_admin)
        .bind(&new.password_hash)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 150,
        message = "Username length must be between 1 and 150 characters."
    ))]
    pub username: String,
    #[validate(email(message = "Email must be a valid address."))]
    pub email: String,
    #[validate(length(
        min = 1,
        max = 128,
        message = "Password length must be between 1 and 128 characters."
    ))]
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Public view of a user. Never carries the password in any form.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}
