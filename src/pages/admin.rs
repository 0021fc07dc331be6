//! Admin Dashboard
//!
//! Election management: create elections, add candidates, start elections,
//! and inspect tallied results.
//!
//! The listing reuses the voter elections endpoint; the backend exposes no
//! dedicated all-elections route for admins.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::{self, Candidate, Election, ElectionResults};
use crate::components::{FormError, Modal, ResultsPanel};
use crate::state::GlobalState;

use super::{fetch_elections_with_candidates, format_date, StatusBadge};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminModal {
    CreateElection,
    AddCandidate,
}

/// Admin dashboard component
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (modal, set_modal) = create_signal(None::<AdminModal>);
    let results = create_rw_signal(None::<ElectionResults>);

    // Fetch elections on mount
    create_effect(move |_| {
        load_dashboard(state);
    });

    // Start election: confirm prompt, POST, reload. Failures surface as an
    // application-level alert, not a form slot
    let on_start = move |election_id: u32| {
        if !confirm(
            "Are you sure you want to start this election? \
             Users will be able to vote once it starts.",
        ) {
            return;
        }
        let Some(session) = state.session.current_untracked() else {
            return;
        };

        spawn_local(async move {
            state.loading.set(true);
            match api::start_election(&session.token, election_id).await {
                Ok(()) => {
                    state.show_success("Election started successfully!");
                    reload_dashboard(state, &session.token).await;
                }
                Err(e) => alert(&format!("Failed to start election: {}", e)),
            }
            state.loading.set(false);
        });
    };

    let on_results = move |election_id: u32| {
        let Some(session) = state.session.current_untracked() else {
            return;
        };

        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_results(&session.token, election_id).await {
                Ok(tally) => results.set(Some(tally)),
                Err(e) => alert(&format!("Failed to load results: {}", e)),
            }
            state.loading.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Election Management"</h1>
                    <p class="text-gray-400 mt-1">"Create elections, add candidates, track results"</p>
                </div>

                <div class="flex space-x-3">
                    <button
                        on:click=move |_| set_modal.set(Some(AdminModal::CreateElection))
                        class="px-4 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "+ Create Election"
                    </button>
                    <button
                        on:click=move |_| set_modal.set(Some(AdminModal::AddCandidate))
                        class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                               font-medium transition-colors"
                    >
                        "+ Add Candidate"
                    </button>
                </div>
            </div>

            {move || {
                let elections = state.elections.get();
                if elections.is_empty() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-12 text-center text-gray-400">
                            <div class="text-4xl mb-4">"📥"</div>
                            <h3 class="text-xl font-semibold text-white mb-1">"No Elections Yet"</h3>
                            <p>"Create your first election to get started"</p>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="space-y-6">
                            {elections
                                .into_iter()
                                .map(|election| {
                                    let candidates = state.candidates_for(election.id);
                                    view! {
                                        <AdminElectionCard
                                            election=election
                                            candidates=candidates
                                            on_start=on_start
                                            on_results=on_results
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>

        <CreateElectionModal
            open=Signal::derive(move || modal.get() == Some(AdminModal::CreateElection))
            set_modal=set_modal
        />
        <AddCandidateModal
            open=Signal::derive(move || modal.get() == Some(AdminModal::AddCandidate))
            set_modal=set_modal
        />

        // Results dialog; the chart inside exists only while this is open
        <Modal
            title="Election Results"
            open=Signal::derive(move || results.get().is_some())
            on_close=move |_| results.set(None)
        >
            {move || {
                results.get().map(|tally| view! {
                    <ResultsPanel results=tally />
                })
            }}
        </Modal>
    }
}

/// Fetch the admin dashboard data, replacing the cache wholesale
fn load_dashboard(state: GlobalState) {
    let Some(session) = state.session.current_untracked() else {
        return;
    };

    spawn_local(async move {
        state.loading.set(true);
        reload_dashboard(state, &session.token).await;
        state.loading.set(false);
    });
}

async fn reload_dashboard(state: GlobalState, token: &str) {
    match fetch_elections_with_candidates(token).await {
        Ok((elections, candidates)) => state.set_dashboard(elections, candidates),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load dashboard: {}", e).into());
            state.show_error("Failed to load dashboard data");
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// One election row with management actions
#[component]
fn AdminElectionCard(
    election: Election,
    candidates: Vec<Candidate>,
    #[prop(into)] on_start: Callback<u32>,
    #[prop(into)] on_results: Callback<u32>,
) -> impl IntoView {
    let election_id = election.id;

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="text-xl font-semibold">{election.title.clone()}</h3>
                    {election.description.clone().map(|desc| view! {
                        <p class="text-gray-400 text-sm mt-1">{desc}</p>
                    })}
                    <div class="flex items-center space-x-4 text-sm text-gray-400 mt-2">
                        <span>{format_date(&election.created_at)}</span>
                        <StatusBadge is_active=election.is_active />
                    </div>
                </div>

                <div class="flex space-x-2">
                    {(!election.is_active).then(|| view! {
                        <button
                            on:click=move |_| on_start.call(election_id)
                            class="px-3 py-2 bg-green-600 hover:bg-green-700 rounded-lg
                                   text-sm font-medium transition-colors"
                        >
                            "Start"
                        </button>
                    })}
                    <button
                        on:click=move |_| on_results.call(election_id)
                        class="px-3 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Results"
                    </button>
                </div>
            </div>

            <div>
                <span class="text-sm font-semibold text-gray-300">
                    {format!("Candidates ({}):", candidates.len())}
                </span>
                {if candidates.is_empty() {
                    view! {
                        <p class="text-gray-500 text-sm mt-1">"No candidates added yet"</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <ul class="list-disc list-inside text-sm text-gray-400 mt-1">
                            {candidates
                                .iter()
                                .map(|c| view! { <li>{c.name.clone()}</li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}

/// Create-election dialog
#[component]
fn CreateElectionModal(
    open: Signal<bool>,
    set_modal: WriteSignal<Option<AdminModal>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (is_active, set_is_active) = create_signal(false);
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_is_active.set(false);
        error.set(None);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(session) = state.session.current_untracked() else {
            return;
        };
        let title_value = title.get_untracked().trim().to_string();
        let description_value = description.get_untracked().trim().to_string();
        let active_value = is_active.get_untracked();
        error.set(None);

        spawn_local(async move {
            state.loading.set(true);
            match api::create_election(&session.token, &title_value, &description_value, active_value)
                .await
            {
                Ok(_election) => {
                    reset();
                    set_modal.set(None);
                    state.show_success("Election created successfully!");
                    reload_dashboard(state, &session.token).await;
                }
                Err(e) => error.set(Some(e)),
            }
            state.loading.set(false);
        });
    };

    view! {
        <Modal
            title="Create Election"
            open=open
            on_close=move |_| {
                reset();
                set_modal.set(None);
            }
        >
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white h-24
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <label class="flex items-center space-x-3 text-sm text-gray-300">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                    />
                    <span>"Open for voting immediately"</span>
                </label>

                <FormError error=error />

                <button
                    type="submit"
                    disabled=move || state.loading.get()
                    class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    "Create Election"
                </button>
            </form>
        </Modal>
    }
}

/// Add-candidate dialog
#[component]
fn AddCandidateModal(
    open: Signal<bool>,
    set_modal: WriteSignal<Option<AdminModal>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (election_choice, set_election_choice) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let reset = move || {
        set_election_choice.set(String::new());
        set_name.set(String::new());
        set_description.set(String::new());
        error.set(None);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(session) = state.session.current_untracked() else {
            return;
        };
        error.set(None);

        // Local validation, caught before any request goes out
        let Ok(election_id) = election_choice.get_untracked().parse::<u32>() else {
            error.set(Some("Please select an election".to_string()));
            return;
        };

        let name_value = name.get_untracked().trim().to_string();
        let description_value = description.get_untracked().trim().to_string();

        spawn_local(async move {
            state.loading.set(true);
            match api::add_candidate(&session.token, election_id, &name_value, &description_value)
                .await
            {
                Ok(_candidate) => {
                    reset();
                    set_modal.set(None);
                    state.show_success("Candidate added successfully!");
                    reload_dashboard(state, &session.token).await;
                }
                Err(e) => error.set(Some(e)),
            }
            state.loading.set(false);
        });
    };

    view! {
        <Modal
            title="Add Candidate"
            open=open
            on_close=move |_| {
                reset();
                set_modal.set(None);
            }
        >
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Election"</label>
                    <select
                        prop:value=move || election_choice.get()
                        on:change=move |ev| set_election_choice.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    >
                        <option value="">"-- Select Election --"</option>
                        {move || {
                            state
                                .elections
                                .get()
                                .into_iter()
                                .map(|e| {
                                    let label = if e.is_active {
                                        format!("{} (Active)", e.title)
                                    } else {
                                        format!("{} (Inactive)", e.title)
                                    };
                                    view! {
                                        <option value=e.id.to_string()>{label}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-indigo-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white h-24
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
                    "Add Candidate"
                </button>
            </form>
        </Modal>
    }
}
