use leptos::prelude::*;

/// Inline stroke icon (24x24 grid, drawn with `currentColor`)
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icons::markup(name)
        ></svg>
    }
}

/// Icons used by the page
pub mod icons {
    pub const MAIL: &str = "mail";
    pub const LOCK: &str = "lock";
    pub const USER: &str = "user";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const X: &str = "x";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ALERT_CIRCLE: &str = "alert-circle";

    /// SVG body for `name`, empty for unknown names
    pub fn markup(name: &str) -> &'static str {
        match name {
            MAIL => {
                r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline>"#
            }
            LOCK => {
                r#"<rect x="3" y="11" width="18" height="11" rx="2" ry="2"></rect><path d="M7 11V7a5 5 0 0 1 10 0v4"></path>"#
            }
            USER => {
                r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path><circle cx="12" cy="7" r="4"></circle>"#
            }
            EYE => {
                r#"<path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"></path><circle cx="12" cy="12" r="3"></circle>"#
            }
            EYE_OFF => {
                r#"<path d="M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19m-6.72-1.07a3 3 0 1 1-4.24-4.24"></path><line x1="1" y1="1" x2="23" y2="23"></line>"#
            }
            X => {
                r#"<line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line>"#
            }
            CHECK_CIRCLE => {
                r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path><polyline points="22 4 12 14.01 9 11.01"></polyline>"#
            }
            ALERT_CIRCLE => {
                r#"<circle cx="12" cy="12" r="10"></circle><line x1="12" y1="8" x2="12" y2="12"></line><line x1="12" y1="16" x2="12.01" y2="16"></line>"#
            }
            _ => "",
        }
    }

}
