//! Login / Sign Up form
//!
//! Holds the form state, runs validation on submit and talks to the mock
//! user store. Results are reported through the `notify` callback; field
//! errors are rendered inline.

use leptos::logging::{error, log};
use leptos::prelude::*;

use super::field::CredentialField;
use super::mode_tabs::ModeTabs;
use crate::core::{
    AuthError, AuthMode, FormField, FormState, MockAuthService, Notice, SharedStore,
    SubmitOutcome,
};
use crate::ui::icon::icons;

/// Credential form component
#[component]
pub fn CredentialForm(
    /// Shows a notice on the page
    notify: Callback<Notice>,
    /// Where users and the session marker are kept
    store: SharedStore,
) -> impl IntoView {
    let service = StoredValue::new(MockAuthService::new(store));

    let form = RwSignal::new(FormState::new(AuthMode::Login));
    let show_password = RwSignal::new(false);
    let show_confirm_password = RwSignal::new(false);

    let mode = Memo::new(move |_| form.with(|f| f.mode()));
    let shows = move |field: FormField| mode.get().fields().contains(&field);
    let set_mode = Callback::new(move |next: AuthMode| {
        form.try_update(|f| f.set_mode(next));
    });

    let value = move |field: FormField| {
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    };
    let error = move |field: FormField| {
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    };
    let on_input = move |field: FormField| {
        Callback::new(move |text: String| form.update(|f| f.update(field, text)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(result) = form.try_update(|f| service.with_value(|s| s.submit(f))) else {
            return;
        };

        match result {
            Ok(outcome) => {
                match &outcome {
                    SubmitOutcome::LoggedIn(user) => log!("Logged in as {}", user.email),
                    SubmitOutcome::Registered(user) => {
                        log!("Registered {} with id {}", user.email, user.id)
                    }
                }
                notify.run(outcome.notice());
                if let Some(next) = outcome.next_mode() {
                    switch_mode_later(form, next);
                }
            }
            Err(err) => {
                if let AuthError::Storage(cause) = &err {
                    error!("Mock user store failed: {}", cause);
                }
                notify.run(err.notice());
            }
        }
    };

    view! {
        <div class="w-full max-w-md p-8 rounded-xl bg-white shadow-lg">
            <ModeTabs mode=mode on_change=set_mode />

            <h2 class="text-2xl font-bold text-center mb-6 text-gray-800">
                {move || mode.get().heading()}
            </h2>

            <form on:submit=on_submit class="space-y-5" novalidate=true>
                <Show when=move || shows(FormField::Name)>
                    <CredentialField
                        field=FormField::Name
                        placeholder="Full Name"
                        icon=icons::USER
                        value=value(FormField::Name)
                        error=error(FormField::Name)
                        on_input=on_input(FormField::Name)
                    />
                </Show>

                <CredentialField
                    field=FormField::Email
                    placeholder="Email Address"
                    icon=icons::MAIL
                    value=value(FormField::Email)
                    error=error(FormField::Email)
                    on_input=on_input(FormField::Email)
                />

                <CredentialField
                    field=FormField::Password
                    placeholder="Password"
                    icon=icons::LOCK
                    value=value(FormField::Password)
                    error=error(FormField::Password)
                    on_input=on_input(FormField::Password)
                    reveal=show_password
                />

                <Show
                    when=move || shows(FormField::ConfirmPassword)
                    fallback=|| view! {
                        // No behaviour behind this link yet
                        <div class="flex justify-end">
                            <button
                                type="button"
                                class="text-sm text-purple-600 hover:text-purple-800 transition-colors cursor-pointer"
                            >
                                "Forgot password?"
                            </button>
                        </div>
                    }
                >
                    <CredentialField
                        field=FormField::ConfirmPassword
                        placeholder="Confirm Password"
                        icon=icons::LOCK
                        value=value(FormField::ConfirmPassword)
                        error=error(FormField::ConfirmPassword)
                        on_input=on_input(FormField::ConfirmPassword)
                        reveal=show_confirm_password
                    />
                </Show>

                <button
                    type="submit"
                    class="w-full py-3 px-4 rounded-full bg-gradient-to-r cursor-pointer from-purple-500 to-indigo-600 text-white font-medium shadow-md hover:shadow-lg hover:scale-[1.02] active:scale-[0.98] transition-all duration-300"
                >
                    {move || mode.get().label()}
                </button>
            </form>
        </div>
    }
}

/// Move the form to `next` once the success notice had a moment on screen.
/// Does nothing if the form is gone by then or already shows `next`, so
/// input typed after a manual tab switch survives.
fn switch_mode_later(form: RwSignal<FormState>, next: AuthMode) {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::MODE_SWITCH_DELAY_MS;
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(MODE_SWITCH_DELAY_MS).await;
            form.try_update(|f| f.set_mode(next));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // Submissions only happen in the browser
        form.try_update(|f| f.set_mode(next));
    }
}
