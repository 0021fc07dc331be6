//! Landing Page
//!
//! Anonymous hero section with the login and registration dialogs. A
//! successful login or registration saves the session; the router then swaps
//! in the matching dashboard.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api;
use crate::components::{FormError, Modal};
use crate::state::{GlobalState, Session};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthModal {
    Login,
    Register,
}

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let (modal, set_modal) = create_signal(None::<AuthModal>);

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🗳️"</div>
            <h1 class="text-4xl font-bold mb-2">"Your Voice. Your Vote."</h1>
            <p class="text-gray-400 mb-8 max-w-xl">
                "Browse active elections, review the candidates, and cast your vote. \
                 Sign in to get started."
            </p>

            <div class="flex space-x-4">
                <button
                    on:click=move |_| set_modal.set(Some(AuthModal::Login))
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium
                           transition-colors"
                >
                    "Login"
                </button>
                <button
                    on:click=move |_| set_modal.set(Some(AuthModal::Register))
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium
                           transition-colors"
                >
                    "Register"
                </button>
            </div>
        </div>

        <LoginModal
            open=Signal::derive(move || modal.get() == Some(AuthModal::Login))
            set_modal=set_modal
        />
        <RegisterModal
            open=Signal::derive(move || modal.get() == Some(AuthModal::Register))
            set_modal=set_modal
        />
    }
}

/// Login dialog
#[component]
fn LoginModal(
    open: Signal<bool>,
    set_modal: WriteSignal<Option<AuthModal>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (identifier, set_identifier) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        set_identifier.set(String::new());
        set_password.set(String::new());
        error.set(None);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let identifier_value = identifier.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        error.set(None);

        spawn_local(async move {
            state.loading.set(true);
            match api::login(&identifier_value, &password_value).await {
                Ok(auth) => {
                    // Identity claims are written as one record; the view
                    // switch below is a consequence of this save
                    state.session.save(Session {
                        token: auth.access_token,
                        username: identifier_value,
                        is_admin: auth.is_admin,
                    });
                    set_modal.set(None);
                    state.show_success("Login successful!");
                }
                Err(e) => error.set(Some(e)),
            }
            state.loading.set(false);
        });
    };

    view! {
        <Modal
            title="Login"
            open=open
            on_close=move |_| {
                reset();
                set_modal.set(None);
            }
        >
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username or Email"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || identifier.get()
                        on:input=move |ev| set_identifier.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <FormError error=error />

                <button
                    type="submit"
                    disabled=move || state.loading.get()
                    class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    "Login"
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4 text-center">
                "Don't have an account? "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        reset();
                        set_modal.set(Some(AuthModal::Register));
                    }
                    class="text-indigo-400 hover:underline"
                >
                    "Register"
                </a>
            </p>
        </Modal>
    }
}

/// Registration dialog
#[component]
fn RegisterModal(
    open: Signal<bool>,
    set_modal: WriteSignal<Option<AuthModal>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        set_username.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
        set_confirm.set(String::new());
        error.set(None);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let username_value = username.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        error.set(None);

        // Local validation, caught before any request goes out
        if password_value != confirm.get_untracked() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        spawn_local(async move {
            state.loading.set(true);
            match api::register(&username_value, &email_value, &password_value).await {
                Ok(auth) => {
                    state.session.save(Session {
                        token: auth.access_token,
                        username: username_value,
                        is_admin: auth.is_admin,
                    });
                    set_modal.set(None);
                    state.show_success("Registration successful!");
                }
                Err(e) => error.set(Some(e)),
            }
            state.loading.set(false);
        });
    };

    view! {
        <Modal
            title="Register"
            open=open
            on_close=move |_| {
                reset();
                set_modal.set(None);
            }
        >
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Confirm Password"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <FormError error=error />

                <button
                    type="submit"
                    disabled=move || state.loading.get()
                    class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    "Create Account"
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4 text-center">
                "Already have an account? "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        reset();
                        set_modal.set(Some(AuthModal::Login));
                    }
                    class="text-indigo-400 hover:underline"
                >
                    "Login"
                </a>
            </p>
        </Modal>
    }
}
