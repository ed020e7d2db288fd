//! Login / Sign Up page
//!
//! Decorative image panel on one side, credential form on the other. The
//! page owns the notification slot the form reports into.

use leptos::prelude::*;

use crate::core::store::browser_store;
use crate::core::{Notice, NotificationSlot};
use crate::ui::auth::CredentialForm;
use crate::ui::notifications::Toast;

/// Auth page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let slot = RwSignal::new(NotificationSlot::new());

    let notify = Callback::new(move |notice: Notice| {
        slot.update(|s| {
            s.show(notice);
        });
    });

    // Rebuilt on every `show`, so a replacing notice gets a fresh timer
    let current = Memo::new(move |_| slot.with(|s| s.current().cloned()));

    view! {
        <div class="min-h-screen flex flex-col md:flex-row font-poppins">
            <div class="md:w-1/2 bg-cover bg-center h-64 md:h-screen relative overflow-hidden">
                <img
                    src="/images/auth-bg.jpg"
                    alt="Background"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-purple-500/30 to-indigo-600/30 flex items-center justify-center">
                    <div class="text-center p-5">
                        <div class="flex justify-center mb-4">
                            <img src="/images/demo.png" alt="Logo" class="h-16" />
                        </div>
                        <h1 class="text-white text-3xl md:text-4xl font-bold mb-4 drop-shadow-lg">
                            "Welcome Back"
                        </h1>
                        <p class="text-white text-lg md:text-xl max-w-md mx-auto drop-shadow-md">
                            "Sign in to continue your journey with us and explore all our amazing features."
                        </p>
                    </div>
                </div>
            </div>

            <div class="md:w-1/2 flex items-center justify-center p-5 bg-gray-50">
                <CredentialForm notify=notify store=browser_store() />
            </div>

            {move || {
                current.get().map(|active| {
                    let id = active.id;
                    view! {
                        <Toast
                            notice=active.notice
                            on_dismiss=Callback::new(move |_| {
                                slot.update(|s| {
                                    s.dismiss(id);
                                });
                            })
                        />
                    }
                })
            }}
        </div>
    }
}
