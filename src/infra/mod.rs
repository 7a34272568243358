//! Outbound API access and client-local persistence.

pub mod api;
pub mod fallback;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use storage::{LocalStorage, TOKEN_KEY, USER_KEY};
