//! User repository
//!
//! One named operation per statement, each returning a typed result so
//! the caller decides whether an error aborts the run.

use futures::TryStreamExt;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Enumerate the whole table, invoking `each` as rows arrive.
    ///
    /// Rows are consumed incrementally from the stream rather than
    /// buffered up front. Dropping the stream releases the result set on
    /// every exit path, including a mid-iteration error, which is returned
    /// to the caller instead of terminating anything. Returns the number
    /// of rows seen.
    pub async fn for_each(&self, mut each: impl FnMut(&User)) -> Result<usize, DbError> {
        let mut rows =
            sqlx::query_as::<_, User>("SELECT id, first_name, last_name FROM users")
                .fetch(self.pool);

        let mut count = 0;
        while let Some(user) = rows.try_next().await? {
            each(&user);
            count += 1;
        }
        Ok(count)
    }

    /// Insert a user, capturing the database-assigned id.
    pub async fn create(&self, first_name: &str, last_name: &str) -> Result<User, DbError> {
        let user = sqlx::query_as(
            r#"
            INSERT INTO users (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Change a user's first name. Returns the affected-row count;
    /// zero means no row had that id.
    pub async fn rename(&self, id: i32, first_name: &str) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE users SET first_name = $1 WHERE id = $2")
            .bind(first_name)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Fetch exactly one user by id.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as("SELECT id, first_name, last_name FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    /// Delete a user by id. Returns the affected-row count.
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
