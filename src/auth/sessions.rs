// src/auth/sessions.rs
use crate::auth::token::{generate_session_token, hash_token};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// Create a session row and return the raw token for the cookie.
pub fn create_session(conn: &Connection, user_id: i64, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_session_token();
    let hash = hash_token(&raw_token);
    let expires_at = now + SESSION_TTL_SECS;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// Resolve a live session token to `(user_id, display_name)`.
pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<(i64, String)>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.display_name
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);

    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}
