use serde::Serialize;

// The password digest is never part of this struct; login reads it through a
// handler-local row type so it cannot leak into a response body.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub role: String,
}
