//! Session Cookies
//!
//! The session lives in three cookies. This module only parses and
//! formats cookie strings; reading `document.cookie` is the UI's job.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::LoginResponse;

pub const ACCESS_TOKEN_COOKIE: &str = "users_access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "users_refresh_token";
pub const USER_ID_COOKIE: &str = "user_id";

pub const SESSION_COOKIES: [&str; 3] = [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, USER_ID_COOKIE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// Restore from a `document.cookie` string; `None` without an access token
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        let access_token = cookie_value(header, ACCESS_TOKEN_COOKIE).filter(|t| !t.is_empty())?;
        Some(Self {
            access_token,
            refresh_token: cookie_value(header, REFRESH_TOKEN_COOKIE),
            user_id: cookie_value(header, USER_ID_COOKIE),
        })
    }

    pub fn from_login(login: &LoginResponse) -> Self {
        Self {
            access_token: login.access_token.clone(),
            refresh_token: Some(login.refresh_token.clone()),
            user_id: Some(login.user_id.clone()),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Cookie assignments persisting this session
    pub fn to_cookies(&self) -> Vec<String> {
        let mut cookies = vec![set_cookie(ACCESS_TOKEN_COOKIE, &self.access_token)];
        if let Some(refresh) = &self.refresh_token {
            cookies.push(set_cookie(REFRESH_TOKEN_COOKIE, refresh));
        }
        if let Some(user_id) = &self.user_id {
            cookies.push(set_cookie(USER_ID_COOKIE, user_id));
        }
        cookies
    }
}

/// Find one cookie in a `name=value; name2=value2` string
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| percent_decode_str(v).decode_utf8_lossy().into_owned())
}

pub fn set_cookie(name: &str, value: &str) -> String {
    format!("{}={}; Path=/; SameSite=Lax", name, utf8_percent_encode(value, NON_ALPHANUMERIC))
}

pub fn expire_cookie(name: &str) -> String {
    format!("{}=; Path=/; Max-Age=0", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let header = "theme=dark; users_access_token=abc.def; users_refresh_token=r1; user_id=42";
        let session = Session::from_cookie_header(header).unwrap();
        assert_eq!(session.access_token, "abc.def");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.user_id.as_deref(), Some("42"));
        assert_eq!(session.bearer(), "Bearer abc.def");
    }

    #[test]
    fn test_missing_or_empty_token_means_no_session() {
        assert!(Session::from_cookie_header("user_id=42").is_none());
        assert!(Session::from_cookie_header("users_access_token=; user_id=42").is_none());
        assert!(Session::from_cookie_header("").is_none());
    }

    #[test]
    fn test_cookie_value_is_decoded() {
        let cookie = set_cookie(USER_ID_COOKIE, "a b/c");
        let pair = cookie.split(';').next().unwrap();
        assert_eq!(cookie_value(pair, USER_ID_COOKIE).as_deref(), Some("a b/c"));
    }

    #[test]
    fn test_login_round_trip_through_cookies() {
        let login = LoginResponse {
            access_token: "t".into(),
            refresh_token: "r".into(),
            user_id: "u1".into(),
            role: Some("admin".into()),
        };
        let session = Session::from_login(&login);
        let header: Vec<String> = session
            .to_cookies()
            .iter()
            .map(|c| c.split(';').next().unwrap().to_string())
            .collect();
        assert_eq!(Session::from_cookie_header(&header.join("; ")), Some(session));
    }

    #[test]
    fn test_expire_cookie() {
        assert_eq!(expire_cookie(USER_ID_COOKIE), "user_id=; Path=/; Max-Age=0");
    }
}
