use crate::auth::context::{cleared_session_cookie, normalize_display_name, session_cookie};
use crate::auth::sessions::{create_session, revoke_session};
use crate::auth::{AuthContext, SESSION_COOKIE};
use crate::catalog::{locality_count, PropertySource, StaticCatalog, DEFAULT_CATEGORY, HUBLI_LOCALITIES};
use crate::config::AppConfig;
use crate::db::users::{get_or_create_user, touch_last_login};
use crate::db::Database;
use crate::domain::{SearchFilter, SearchState};
use crate::errors::ServerError;
use crate::notices::Notice;
use crate::requests::{cookie_value, is_secure, parse_query, read_form};
use crate::responses::{
    css_response, html_response, redirect, redirect_with_cookies, safe_return_path, ResultResp,
};
use crate::templates::components::SearchPanelVm;
use crate::templates::pages;
use crate::wishlist::{self, DynStorage, WishlistBackend, WishlistStorage, WishlistStore};
use astra::Request;
use chrono::Utc;
use std::collections::{HashMap, HashSet};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Everything a handler needs besides the request itself.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub wishlist_backend: WishlistBackend,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: Database, config: &AppConfig) -> Self {
        Self {
            db,
            wishlist_backend: config.wishlist_backend,
            secure_cookies: config.secure_cookies,
        }
    }

    fn secure(&self, req: &Request) -> bool {
        self.secure_cookies || is_secure(req)
    }

    fn open_wishlist(&self, req: &Request, auth: &AuthContext) -> WishlistStore<DynStorage> {
        wishlist::open_store(self.wishlist_backend, req, &self.db, auth, self.secure(req))
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, app),
        ("GET", "/properties") => properties(&req, app),
        ("GET", "/localities") => localities(&req, app),
        ("GET", "/wishlist") => wishlist_view(&req, app),
        ("POST", "/wishlist/toggle") => wishlist_toggle(req, app),
        ("POST", "/wishlist/remove") => wishlist_remove(req, app),
        ("GET", "/login") => login_form(&req, app),
        ("POST", "/login") => login(req, app),
        ("POST", "/logout") => logout(&req, app),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

fn now_unix() -> i64 {
    Utc::now().timestamp()
}

fn saved_ids<S: WishlistStorage>(store: &WishlistStore<S>) -> HashSet<i64> {
    store.entries().iter().map(|p| p.id).collect()
}

/// A notice handed over through `?notice=<code>&id=<property>`.
fn notice_from_query(query: &HashMap<String, String>) -> Option<Notice> {
    let code = query.get("notice")?;
    let property = query
        .get("id")
        .and_then(|id| id.parse::<i64>().ok())
        .and_then(|id| StaticCatalog.find(id));
    Notice::from_code(code, property.as_ref())
}

fn with_notice(path: &str, code: &str, id: Option<i64>) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    match id {
        Some(id) => format!("{path}{sep}notice={code}&id={id}"),
        None => format!("{path}{sep}notice={code}"),
    }
}

fn form_property_id(form: &HashMap<String, String>) -> Result<i64, ServerError> {
    form.get("property_id")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .ok_or_else(|| ServerError::BadRequest("missing or invalid property_id".into()))
}

fn home(req: &Request, app: &AppState) -> ResultResp {
    let auth = AuthContext::from_request(req, &app.db, now_unix())?;
    let query = parse_query(req);

    let location = query.get("location").map(String::as_str).unwrap_or("");
    let price_range = query.get("price").map(String::as_str).unwrap_or("");
    let category = query
        .get("category")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CATEGORY);

    // Submitting the panel always switches to "search results", even with
    // both selects on "any". `reset` goes back to the featured grid.
    let submitted = query.contains_key("location") || query.contains_key("price");
    let searching = submitted && !query.contains_key("reset");

    let mut state = SearchState::new(StaticCatalog.properties());
    let filter = SearchFilter::new(Some(location), Some(price_range));
    if searching {
        state.search(&filter);
    } else {
        state.reset();
    }

    let notice = if state.is_empty_result() {
        Some(Notice::no_results())
    } else {
        notice_from_query(&query)
    };

    let return_to = if searching {
        let qs = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("category", category)
            .append_pair("location", location)
            .append_pair("price", price_range)
            .finish();
        format!("/?{qs}")
    } else {
        "/".to_string()
    };

    let store = app.open_wishlist(req, &auth);
    let saved = saved_ids(&store);

    let vm = pages::HomeVm {
        auth: &auth,
        notice,
        panel: SearchPanelVm {
            category: (if searching { category } else { DEFAULT_CATEGORY }).to_string(),
            location: (if searching { location } else { "" }).to_string(),
            price_range: (if searching { price_range } else { "" }).to_string(),
            result_count: searching.then(|| state.results().len()),
        },
        properties: state.results(),
        filtered: state.is_filtered(),
        saved: &saved,
        return_to,
    };

    html_response(pages::home_page(&vm))
}

fn properties(req: &Request, app: &AppState) -> ResultResp {
    let auth = AuthContext::from_request(req, &app.db, now_unix())?;
    let notice = notice_from_query(&parse_query(req));
    let store = app.open_wishlist(req, &auth);

    html_response(pages::properties_page(
        &auth,
        notice.as_ref(),
        &StaticCatalog.properties(),
        &saved_ids(&store),
    ))
}

fn localities(req: &Request, app: &AppState) -> ResultResp {
    let auth = AuthContext::from_request(req, &app.db, now_unix())?;
    let counts: Vec<(&str, usize)> = HUBLI_LOCALITIES
        .iter()
        .map(|name| (*name, locality_count(&StaticCatalog, name)))
        .collect();

    html_response(pages::localities_page(&auth, &counts))
}

fn wishlist_view(req: &Request, app: &AppState) -> ResultResp {
    let auth = AuthContext::from_request(req, &app.db, now_unix())?;
    let notice = notice_from_query(&parse_query(req));
    let store = app.open_wishlist(req, &auth);

    html_response(pages::wishlist_page(&auth, notice.as_ref(), store.entries()))
}

fn wishlist_toggle(mut req: Request, app: &AppState) -> ResultResp {
    let auth = AuthContext::from_request(&req, &app.db, now_unix())?;
    let form = read_form(&mut req)?;

    let Some(user_id) = auth.user_id() else {
        return redirect(&with_notice("/login", "auth", None));
    };

    let id = form_property_id(&form)?;
    let property = StaticCatalog
        .find(id)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown property {id}")))?;
    let next = safe_return_path(form.get("next").map(String::as_str), "/");

    let mut store = app.open_wishlist(&req, &auth);
    let saved = store.toggle(property);
    tracing::info!(user_id, property_id = id, saved, "wishlist toggled");

    let code = if saved { "added" } else { "removed" };
    let cookies: Vec<_> = store.storage().set_cookie().into_iter().collect();
    redirect_with_cookies(&with_notice(&next, code, Some(id)), &cookies)
}

fn wishlist_remove(mut req: Request, app: &AppState) -> ResultResp {
    let auth = AuthContext::from_request(&req, &app.db, now_unix())?;
    let form = read_form(&mut req)?;

    let Some(user_id) = auth.user_id() else {
        return redirect(&with_notice("/login", "auth", None));
    };

    let id = form_property_id(&form)?;
    let mut store = app.open_wishlist(&req, &auth);
    let removed = store.remove(id);
    tracing::info!(user_id, property_id = id, removed, "wishlist entry removed");

    let target = if removed {
        with_notice("/wishlist", "removed", Some(id))
    } else {
        "/wishlist".to_string()
    };
    let cookies: Vec<_> = store.storage().set_cookie().into_iter().collect();
    redirect_with_cookies(&target, &cookies)
}

fn login_form(req: &Request, app: &AppState) -> ResultResp {
    let auth = AuthContext::from_request(req, &app.db, now_unix())?;
    let notice = notice_from_query(&parse_query(req));
    html_response(pages::login_page(&auth, notice.as_ref()))
}

fn login(mut req: Request, app: &AppState) -> ResultResp {
    let form = read_form(&mut req)?;
    let name = normalize_display_name(form.get("name").map(String::as_str).unwrap_or(""))?;
    let now = now_unix();

    let (user_id, token) = app.db.with_conn(|conn| {
        let user_id = get_or_create_user(conn, &name, now)?;
        touch_last_login(conn, user_id, now)?;
        let token = create_session(conn, user_id, now)?;
        Ok((user_id, token))
    })?;
    tracing::info!(user_id, "signed in");

    redirect_with_cookies("/", &[session_cookie(&token, app.secure(&req))])
}

fn logout(req: &Request, app: &AppState) -> ResultResp {
    if let Some(token) = cookie_value(req, SESSION_COOKIE) {
        let now = now_unix();
        app.db.with_conn(|conn| revoke_session(conn, &token, now))?;
        tracing::info!("signed out");
    }

    redirect_with_cookies(
        &with_notice("/", "signed_out", None),
        &[cleared_session_cookie(app.secure(req))],
    )
}
