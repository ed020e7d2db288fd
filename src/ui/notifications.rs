//! Toast shown at the top of the page
//!
//! The toast owns the only auto-hide timer for its notice. The timer is
//! cleared when the toast is unmounted, so a replaced or dismissed toast
//! never calls back into the page.

use leptos::prelude::*;

use crate::core::{DismissOnce, Notice, Severity};
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use crate::core::NOTIFICATION_TIMEOUT_MS;

/// Single notice toast
#[component]
pub fn Toast(
    /// Message and severity to show
    notice: Notice,
    /// Called exactly once, on timeout or close click, whichever comes first
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let once = StoredValue::new(DismissOnce::default());
    let dismiss = move || {
        if once.try_update_value(DismissOnce::fire).unwrap_or(false) {
            on_dismiss.run(());
        }
    };

    #[cfg(not(feature = "ssr"))]
    {
        let timeout = std::time::Duration::from_millis(NOTIFICATION_TIMEOUT_MS.into());
        match set_timeout_with_handle(dismiss, timeout) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => leptos::logging::warn!("Failed to schedule toast timeout: {:?}", e),
        }
    }

    let (container_class, icon_class, icon_name) = match notice.severity {
        Severity::Success => (
            "bg-green-50 text-green-800",
            "w-5 h-5 text-green-600",
            icons::CHECK_CIRCLE,
        ),
        Severity::Error => (
            "bg-red-50 text-red-800",
            "w-5 h-5 text-red-600",
            icons::ALERT_CIRCLE,
        ),
    };

    view! {
        <div
            class=format!(
                "fixed top-4 left-1/2 -translate-x-1/2 z-50 flex items-center p-4 w-full max-w-xs rounded-lg shadow-lg toast-enter {}",
                container_class
            )
            role="alert"
        >
            <div class="inline-flex flex-shrink-0 justify-center items-center w-8 h-8 rounded-lg">
                <Icon name=icon_name class=icon_class />
            </div>
            <div class="ml-3 text-sm font-normal">{notice.message}</div>
            <button
                type="button"
                class="ml-auto -mx-1.5 -my-1.5 rounded-lg focus:ring-2 p-1.5 inline-flex h-8 w-8 hover:bg-gray-100 cursor-pointer"
                aria-label="Close"
                on:click=move |_| dismiss()
            >
                <Icon name=icons::X class="w-5 h-5" />
            </button>
        </div>
    }
}
