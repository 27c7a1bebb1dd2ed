//! Request middleware and extractors.

pub mod auth;

pub use auth::{OptionalAuth, RequireAuth, SESSION_COOKIE_NAME, session_cookie};
