//! Loading Component
//!
//! Blocking busy overlay for in-flight requests.

use leptos::*;

use crate::state::GlobalState;

/// Full-screen blocking overlay shown while a request is in flight.
///
/// Controller actions bracket every request with the global loading flag;
/// the hide half of the bracket runs on success and failure alike, so the
/// overlay can only outlive a request that never completes.
#[component]
pub fn BusyOverlay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if state.loading.get() {
                view! {
                    <div class="fixed inset-0 z-50 bg-gray-900/60 flex items-center justify-center">
                        <div class="loading-spinner w-10 h-10" />
                    </div>
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
