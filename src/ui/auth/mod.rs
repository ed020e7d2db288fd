//! Authentication UI module
//!
//! The credential form and the pieces it is built from.

mod credential_form;
mod field;
mod mode_tabs;

pub use credential_form::CredentialForm;
pub use field::CredentialField;
pub use mode_tabs::ModeTabs;
