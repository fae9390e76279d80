/**
 * Session Management
 *
 * The session is an HTTP-only cookie named `ideastream-session` whose value
 * is the raw user id, with a 7-day expiry, `SameSite=Lax`, `Path=/`.
 *
 * `current_user` resolves a request's cookie to a stored user. Every
 * failure mode - missing cookie, unknown user, store error - collapses to
 * "not authenticated"; a store error is logged before it is swallowed.
 */

use axum::http::{header, HeaderMap};

use crate::models::User;
use crate::store::Store;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "ideastream-session";

/// Session lifetime: 7 days.
const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// Build the `Set-Cookie` value that establishes a session for `user_id`.
pub fn session_cookie(user_id: &str) -> String {
    format!(
        "{SESSION_COOKIE}={user_id}; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}; Path=/"
    )
}

/// Build the `Set-Cookie` value that clears the session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Max-Age=0; Path=/")
}

/// Extract the session id (raw user id) from a request's `Cookie` header.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// Resolve the request's session cookie to the stored user.
pub async fn current_user(store: &dyn Store, headers: &HeaderMap) -> Option<User> {
    let session_id = session_id_from_headers(headers)?;

    match store.find_user_by_id(&session_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("failed to look up session user: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("u1");
        assert!(cookie.starts_with("ideastream-session=u1;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.starts_with("ideastream-session=;"));
    }

    #[test]
    fn test_parse_session_id() {
        let headers = headers_with_cookie("ideastream-session=abc123");
        assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_parse_among_other_cookies() {
        let headers =
            headers_with_cookie("theme=dark; ideastream-session=abc123; lang=en");
        assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);

        let headers = headers_with_cookie("theme=dark");
        assert_eq!(session_id_from_headers(&headers), None);

        let headers = headers_with_cookie("ideastream-session=");
        assert_eq!(session_id_from_headers(&headers), None);
    }
}
