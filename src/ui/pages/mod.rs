//! Application pages module
//!
//! - Auth page (login / sign up)
//! - Not found page

mod auth;
mod not_found;

pub use auth::AuthPage;
pub use not_found::NotFoundPage;
