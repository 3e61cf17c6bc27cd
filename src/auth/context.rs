// src/auth/context.rs
use astra::Request;
use cookie::{Cookie, SameSite};

use crate::auth::sessions::{load_user_from_session, SESSION_TTL_SECS};
use crate::db::Database;
use crate::errors::ServerError;
use crate::requests::cookie_value;

pub const SESSION_COOKIE: &str = "session";

const MAX_DISPLAY_NAME_CHARS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub display_name: String,
}

/// Who is looking at the page. Handed to templates and wishlist handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    user: Option<AuthUser>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            user: Some(AuthUser {
                id,
                display_name: display_name.into(),
            }),
        }
    }

    /// Resolve the `session` cookie. Missing, unknown, expired or revoked
    /// tokens all give the anonymous context.
    pub fn from_request(req: &Request, db: &Database, now: i64) -> Result<Self, ServerError> {
        let Some(token) = cookie_value(req, SESSION_COOKIE) else {
            return Ok(Self::anonymous());
        };

        let found = db.with_conn(|conn| load_user_from_session(conn, &token, now))?;
        Ok(match found {
            Some((id, display_name)) => Self::signed_in(id, display_name),
            None => Self::anonymous(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.display_name.as_str())
    }
}

/// Trim and bound a display name submitted at sign-in.
pub fn normalize_display_name(name: &str) -> Result<String, ServerError> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 || len > MAX_DISPLAY_NAME_CHARS {
        return Err(ServerError::BadRequest(format!(
            "display name must be 1 to {MAX_DISPLAY_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

pub fn session_cookie(token: &str, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_owned());
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(SESSION_TTL_SECS));
    cookie
}

pub fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie("", secure);
    cookie.make_removal();
    cookie
}
