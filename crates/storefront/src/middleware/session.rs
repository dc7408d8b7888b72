use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "sessionid";

/// The visitor's session id, available to handlers as an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorSession(pub String);

impl VisitorSession {
    pub fn id(&self) -> &str {
        &self.0
    }
}

fn is_valid_session_id(value: &str) -> bool {
    Uuid::parse_str(value)
        .map(|id| id.get_version_num() == 4)
        .unwrap_or(false)
}

/// Attaches a [`VisitorSession`] to every request, issuing a new
/// `sessionid` cookie when the request carries none or a malformed one.
pub async fn session_middleware(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let existing = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| is_valid_session_id(v));

    if let Some(id) = existing {
        req.extensions_mut().insert(VisitorSession(id));
        return next.run(req).await;
    }

    let id = Uuid::new_v4().to_string();
    debug!("Issuing new visitor session {id}");
    req.extensions_mut().insert(VisitorSession(id.clone()));

    let response = next.run(req).await;

    let cookie = Cookie::build((SESSION_COOKIE, id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), response).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_v4_uuids_are_accepted() {
        assert!(is_valid_session_id(&Uuid::new_v4().to_string()));
        assert!(!is_valid_session_id("not-a-uuid"));
        assert!(!is_valid_session_id("00000000-0000-0000-0000-000000000000"));
    }
}
