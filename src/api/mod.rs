//! REST API
//!
//! One module per backend resource. Every call attaches the session
//! bearer token and maps transport and status failures to `ApiError`.

mod http;

pub mod ask;
pub mod catalog;
pub mod course;
pub mod lesson;
pub mod lookup;
pub mod module;
pub mod user;
