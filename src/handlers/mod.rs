// src/handlers/mod.rs

pub mod answers;
pub mod health;
pub mod questions;
pub mod results;
pub mod tests;
pub mod users;
