// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// Insert a user if they don't exist, then return the user id.
/// Display name should already be trimmed by the caller.
pub fn get_or_create_user(
    conn: &Connection,
    display_name: &str,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (display_name, created_at) values (?, ?)",
        params![display_name, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    conn.query_row(
        "select id from users where display_name = ?",
        params![display_name],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}
