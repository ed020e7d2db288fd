//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4 font-poppins">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white shadow-lg rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 text-purple-500" />
                </div>

                <h1 class="text-6xl font-bold text-gray-800 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-gray-800 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-gray-500 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-block px-6 py-3 rounded-full bg-gradient-to-r from-purple-500 to-indigo-600 text-white font-medium shadow-md hover:shadow-lg transition-all"
                >
                    "Back to Login"
                </A>
            </div>
        </div>
    }
}
