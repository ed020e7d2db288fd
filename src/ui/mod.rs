pub mod auth;
pub mod icon;
pub mod notifications;
pub mod pages;

pub use icon::{Icon, icons};
pub use notifications::Toast;
