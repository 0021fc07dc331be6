//! User Dashboard
//!
//! Voter view: active elections with their candidates, and the vote flow.

use leptos::*;

use crate::api::{self, Candidate, Election};
use crate::components::{FormError, Modal};
use crate::state::GlobalState;

use super::{fetch_elections_with_candidates, format_date, StatusBadge};

/// A vote awaiting confirmation in the dialog
#[derive(Clone, Debug, PartialEq)]
struct PendingVote {
    election_id: u32,
    candidate_id: u32,
    election_title: String,
    candidate_name: String,
}

/// Voter dashboard component
#[component]
pub fn UserDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The vote selected on a card, held until the user confirms or cancels
    let pending = create_rw_signal(None::<PendingVote>);
    let vote_error = create_rw_signal(None::<String>);

    // Fetch elections on mount
    create_effect(move |_| {
        load_elections(state);
    });

    let on_request_vote = move |vote: PendingVote| {
        vote_error.set(None);
        pending.set(Some(vote));
    };

    let close_confirm = move || {
        vote_error.set(None);
        pending.set(None);
    };

    let on_confirm = move |_| {
        let Some(vote) = pending.get_untracked() else {
            return;
        };
        let Some(session) = state.session.current_untracked() else {
            return;
        };
        vote_error.set(None);

        spawn_local(async move {
            state.loading.set(true);
            match api::cast_vote(&session.token, vote.election_id, vote.candidate_id).await {
                Ok(()) => {
                    pending.set(None);
                    state.show_success("Vote cast successfully!");

                    // The tally comes back from the server on re-fetch; the
                    // local cache is never incremented optimistically
                    match fetch_elections_with_candidates(&session.token).await {
                        Ok((elections, candidates)) => state.set_dashboard(elections, candidates),
                        Err(e) => state.show_error(&e),
                    }
                }
                Err(e) => vote_error.set(Some(e)),
            }
            state.loading.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Active Elections"</h1>
                <p class="text-gray-400 mt-1">"Pick a candidate and cast your vote"</p>
            </div>

            {move || {
                let elections = state.elections.get();
                if elections.is_empty() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-12 text-center text-gray-400">
                            <div class="text-4xl mb-4">"📭"</div>
                            <p>"No active elections right now. Check back later."</p>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 gap-6">
                            {elections
                                .into_iter()
                                .map(|election| {
                                    let candidates = state.candidates_for(election.id);
                                    view! {
                                        <ElectionCard
                                            election=election
                                            candidates=candidates
                                            on_request_vote=on_request_vote
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

        // Vote confirmation dialog
        <Modal
            title="Confirm Your Vote"
            open=Signal::derive(move || pending.get().is_some())
            on_close=move |_| close_confirm()
        >
            {move || {
                pending.get().map(|vote| view! {
                    <p class="text-gray-300 mb-1">
                        "You are voting for "
                        <span class="font-semibold text-white">{vote.candidate_name}</span>
                    </p>
                    <p class="text-gray-400 text-sm mb-4">
                        {format!("in {}", vote.election_title)}
                    </p>
                })
            }}
            <p class="text-sm text-yellow-400 mb-4">"A vote cannot be changed once cast."</p>

            <FormError error=vote_error />

            <div class="flex space-x-3 mt-4">
                <button
                    on:click=on_confirm
                    disabled=move || state.loading.get()
                    class="flex-1 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    "Confirm Vote"
                </button>
                <button
                    on:click=move |_| close_confirm()
                    class="flex-1 bg-gray-700 hover:bg-gray-600 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Cancel"
                </button>
            </div>
        </Modal>
    }
}

/// Fetch the voter dashboard data, replacing the cache wholesale
fn load_elections(state: GlobalState) {
    let Some(session) = state.session.current_untracked() else {
        return;
    };

    spawn_local(async move {
        state.loading.set(true);
        match fetch_elections_with_candidates(&session.token).await {
            Ok((elections, candidates)) => state.set_dashboard(elections, candidates),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load elections: {}", e).into());
                state.show_error("Failed to load elections");
            }
        }
        state.loading.set(false);
    });
}

/// Whether a card offers the vote action at all
fn vote_enabled(candidates: &[Candidate]) -> bool {
    !candidates.is_empty()
}

/// One election with its candidate list and vote action
#[component]
fn ElectionCard(
    election: Election,
    candidates: Vec<Candidate>,
    #[prop(into)] on_request_vote: Callback<PendingVote>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (selected, set_selected) = create_signal(None::<u32>);

    let election_id = election.id;
    let election_title = election.title.clone();
    let can_vote = vote_enabled(&candidates);
    let candidate_count = candidates.len();

    let candidates_for_click = candidates.clone();
    let on_vote_click = move |_| match selected.get_untracked() {
        None => state.show_error("Please select a candidate"),
        Some(candidate_id) => {
            if let Some(candidate) = candidates_for_click.iter().find(|c| c.id == candidate_id) {
                on_request_vote.call(PendingVote {
                    election_id,
                    candidate_id,
                    election_title: election_title.clone(),
                    candidate_name: candidate.name.clone(),
                });
            }
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex items-start justify-between">
                <h3 class="text-xl font-semibold">{election.title.clone()}</h3>
                <StatusBadge is_active=election.is_active />
            </div>

            {election.description.clone().map(|desc| view! {
                <p class="text-gray-400 text-sm">{desc}</p>
            })}

            <div class="flex items-center space-x-4 text-sm text-gray-400">
                <span>{format_date(&election.created_at)}</span>
                <span>{format!("{} Candidates", candidate_count)}</span>
            </div>

            <div class="space-y-2">
                <h4 class="text-sm font-semibold text-gray-300">"Candidates:"</h4>
                {if candidates.is_empty() {
                    view! {
                        <p class="text-gray-500 text-sm">"No candidates yet"</p>
                    }
                    .into_view()
                } else {
                    candidates
                        .iter()
                        .map(|candidate| {
                            let candidate_id = candidate.id;
                            view! {
                                <label class="flex items-center justify-between bg-gray-700/50
                                              rounded-lg px-4 py-3 cursor-pointer">
                                    <div>
                                        <div class="font-medium">{candidate.name.clone()}</div>
                                        {candidate.description.clone().map(|desc| view! {
                                            <div class="text-sm text-gray-400">{desc}</div>
                                        })}
                                    </div>
                                    <input
                                        type="radio"
                                        name=format!("election_{}", election_id)
                                        prop:checked=move || selected.get() == Some(candidate_id)
                                        on:change=move |_| set_selected.set(Some(candidate_id))
                                    />
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {can_vote.then(|| view! {
                <button
                    on:click=on_vote_click
                    class="w-full bg-green-600 hover:bg-green-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Cast Your Vote"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32) -> Candidate {
        Candidate {
            id,
            election_id: 1,
            name: format!("candidate-{}", id),
            description: None,
        }
    }

    #[test]
    fn vote_action_suppressed_without_candidates() {
        assert!(!vote_enabled(&[]));
    }

    #[test]
    fn vote_action_offered_with_candidates() {
        assert!(vote_enabled(&[candidate(1), candidate(2)]));
    }
}
