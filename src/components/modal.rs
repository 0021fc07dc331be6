//! Modal Component
//!
//! Shared scaffold for the dialog forms. Clicking the backdrop or the close
//! button invokes the caller's close handler; clicks inside the content do
//! not bubble out. Callers reset their form state and error slot on close.

use leptos::*;

/// Modal dialog scaffold
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if !open.get() {
                return view! {}.into_view();
            }

            view! {
                <div
                    class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center px-4"
                    on:click=move |_| on_close.call(())
                >
                    <div
                        class="bg-gray-800 rounded-xl p-6 w-full max-w-md shadow-xl"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="flex items-center justify-between mb-4">
                            <h3 class="text-xl font-semibold">{title.clone()}</h3>
                            <button
                                on:click=move |_| on_close.call(())
                                class="text-gray-400 hover:text-white text-lg"
                            >
                                "✕"
                            </button>
                        </div>

                        {children()}
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}

/// Form-local error slot shown above a modal's submit button
#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error.get().map(|msg| view! {
                <p class="text-sm text-red-400 bg-red-900/30 rounded-lg px-3 py-2">{msg}</p>
            })
        }}
    }
}
