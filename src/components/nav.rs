//! Navigation Component
//!
//! Header bar with brand and the session-dependent user menu.

use leptos::*;

use crate::state::{GlobalState, Session};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🗳️"</span>
                        <span class="text-xl font-bold text-white">"Voteboard"</span>
                    </div>

                    // User menu, present only when logged in
                    {move || {
                        state.session.current().map(|session| view! {
                            <UserMenu session=session />
                        })
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Greeting and logout button for the authenticated user
#[component]
fn UserMenu(session: Session) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let greeting = if session.is_admin {
        format!("Admin: {}", session.username)
    } else {
        format!("Welcome, {}", session.username)
    };

    // Logout is a pure local side effect: clear the session, drop cached
    // dashboard data, and let the router land on the landing page
    let on_logout = move |_| {
        state.session.clear();
        state.reset_dashboard();
        state.show_success("Logged out successfully");
    };

    view! {
        <div class="flex items-center space-x-4">
            <span class="text-gray-300">{greeting}</span>
            <button
                on:click=on_logout
                class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-gray-200
                       font-medium transition-colors"
            >
                "Logout"
            </button>
        </div>
    }
}
