//! Catalog Core
//!
//! Framework-free model of the course admin console:
//! - models: entities as served by the REST backend
//! - tree: tagged catalog tree and its flattening for the sidebar
//! - store: single-value entity stores with reload tokens
//! - mutation: submit guards and the title-edit workflow
//! - forms / answers: validated form models
//! - notice, upload, routes, session, config, error: supporting pieces

pub mod answers;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod mutation;
pub mod notice;
pub mod routes;
pub mod session;
pub mod store;
pub mod tree;
pub mod upload;

pub use error::{ApiError, ApiResult};
