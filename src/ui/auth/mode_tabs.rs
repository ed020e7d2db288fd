use leptos::prelude::*;

use crate::core::AuthMode;

/// Login / Sign Up switch with a sliding highlight
#[component]
pub fn ModeTabs(
    /// Mode currently shown
    #[prop(into)]
    mode: Signal<AuthMode>,
    /// Called with the clicked tab's mode, even when it is already active
    on_change: Callback<AuthMode>,
) -> impl IntoView {
    let tab = move |tab_mode: AuthMode| {
        let is_active = move || mode.get() == tab_mode;
        view! {
            <button
                type="button"
                role="tab"
                aria-selected=move || is_active().to_string()
                class="relative z-10 w-1/2 py-2 text-sm font-medium rounded-full transition-colors cursor-pointer"
                class=("text-white", is_active)
                class=("text-gray-700", move || !is_active())
                on:click=move |_| on_change.run(tab_mode)
            >
                {tab_mode.label()}
            </button>
        }
    };

    view! {
        <div class="flex justify-center mb-8">
            <div class="relative bg-gray-200 p-1 rounded-full flex w-full max-w-xs" role="tablist">
                <div
                    class="absolute top-1 bottom-1 left-1 rounded-full bg-gradient-to-r from-purple-500 to-indigo-600 transition-transform duration-300 ease-out"
                    style="width: calc(50% - 4px)"
                    style:transform=move || {
                        if mode.get().is_login() { "translateX(0)" } else { "translateX(100%)" }
                    }
                ></div>
                {tab(AuthMode::Login)}
                {tab(AuthMode::Register)}
            </div>
        </div>
    }
}
