//! Rounded input with a leading icon and an inline error line

use leptos::prelude::*;

use crate::core::FormField;
use crate::ui::icon::{Icon, icons};

/// Input type for fields that never hide their value
fn plain_input_type(field: FormField) -> &'static str {
    match field {
        FormField::Email => "email",
        FormField::Name => "text",
        FormField::Password | FormField::ConfirmPassword => "password",
    }
}

/// Single credential input
#[component]
pub fn CredentialField(
    /// Which form value this input edits
    field: FormField,
    /// Placeholder text
    placeholder: &'static str,
    /// Leading icon name
    icon: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Error shown under the input
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Input event callback
    on_input: Callback<String>,
    /// Show/hide toggle for password inputs
    #[prop(optional)]
    reveal: Option<RwSignal<bool>>,
) -> impl IntoView {
    let input_type = move || match reveal {
        Some(shown) if shown.get() => "text",
        _ => plain_input_type(field),
    };

    let padding = if reveal.is_some() { "pr-10" } else { "pr-3" };

    view! {
        <div>
            <div
                class="relative rounded-full overflow-hidden border transition-all"
                class=("border-red-500", move || error.get().is_some())
                class=("border-gray-300", move || error.get().is_none())
                class=("focus-within:border-purple-500", move || error.get().is_none())
            >
                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <Icon name=icon class="h-5 w-5 text-gray-400" />
                </div>
                <input
                    type=input_type
                    name=field.as_str()
                    placeholder=placeholder
                    class=format!(
                        "block w-full pl-10 {} py-3 border-0 bg-transparent placeholder-gray-400 focus:outline-none focus:ring-0",
                        padding
                    )
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                {reveal.map(|shown| view! {
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center cursor-pointer"
                        aria-label=move || if shown.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| shown.update(|v| *v = !*v)
                    >
                        {move || {
                            if shown.get() {
                                view! { <Icon name=icons::EYE_OFF class="h-5 w-5 text-gray-400" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="h-5 w-5 text-gray-400" /> }.into_any()
                            }
                        }}
                    </button>
                })}
            </div>
            {move || {
                error.get().map(|err| view! {
                    <p class="mt-1 text-sm text-red-500 field-error-enter">{err}</p>
                })
            }}
        </div>
    }
}
