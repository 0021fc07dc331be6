//! App Root Component
//!
//! Provides global state and swaps the visible dashboard whenever the
//! session changes.

use leptos::*;

use crate::components::{BusyOverlay, Nav, Toast};
use crate::pages::{AdminDashboard, Landing, UserDashboard};
use crate::state::{provide_global_state, route, GlobalState, View};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components; this also restores the
    // persisted session, so the first route() below already sees it
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Exactly one top-level view is mounted at a time; login,
            // registration, and logout all flow through the session store
            // and land here as a plain re-render
            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match route(state.session.current().as_ref()) {
                    View::Landing => view! { <Landing /> }.into_view(),
                    View::UserDashboard => view! { <UserDashboard /> }.into_view(),
                    View::AdminDashboard => view! { <AdminDashboard /> }.into_view(),
                }}
            </main>

            // Footer with session status
            <Footer />

            // Blocking busy indicator for in-flight requests
            <BusyOverlay />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer component showing session status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"Voteboard"</span>

                {move || {
                    if state.session.is_authenticated() {
                        view! {
                            <span class="flex items-center space-x-1 text-green-400">
                                <span class="w-2 h-2 bg-green-400 rounded-full" />
                                <span>"Signed in"</span>
                            </span>
                        }
                        .into_view()
                    } else {
                        view! {
                            <span>"Signed out"</span>
                        }
                        .into_view()
                    }
                }}
            </div>
        </footer>
    }
}
