//! Browser Session
//!
//! Reads and writes the session cookies through `document.cookie`.

use catalog_core::session::{expire_cookie, Session, SESSION_COOKIES};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Session from the current cookies, if an access token is present
pub fn load_session() -> Option<Session> {
    let header = html_document()?.cookie().ok()?;
    Session::from_cookie_header(&header)
}

pub fn store_session(session: &Session) {
    let Some(doc) = html_document() else { return };
    for cookie in session.to_cookies() {
        if let Err(e) = doc.set_cookie(&cookie) {
            tracing::warn!("[SESSION] failed to set cookie: {:?}", e);
        }
    }
}

pub fn clear_session() {
    let Some(doc) = html_document() else { return };
    for name in SESSION_COOKIES {
        if let Err(e) = doc.set_cookie(&expire_cookie(name)) {
            tracing::warn!("[SESSION] failed to clear {}: {:?}", name, e);
        }
    }
}
