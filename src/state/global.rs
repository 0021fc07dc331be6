//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::collections::HashMap;

use crate::api::{Candidate, Election};

use super::session::SessionStore;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Session store, single writer of identity claims
    pub session: SessionStore,
    /// Elections shown on the current dashboard
    pub elections: RwSignal<Vec<Election>>,
    /// Candidates keyed by election id
    pub candidates: RwSignal<HashMap<u32, Vec<Candidate>>>,
    /// Busy indicator for the in-flight request
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: SessionStore::new(),
        elections: create_rw_signal(Vec::new()),
        candidates: create_rw_signal(HashMap::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    // Restore identity claims persisted by a previous page load
    state.session.restore();

    provide_context(state);
}

impl GlobalState {
    /// Candidates for one election, empty when none were fetched yet
    pub fn candidates_for(&self, election_id: u32) -> Vec<Candidate> {
        self.candidates
            .with(|map| map.get(&election_id).cloned().unwrap_or_default())
    }

    /// Replace the dashboard cache wholesale; there is no merge path
    pub fn set_dashboard(&self, elections: Vec<Election>, candidates: HashMap<u32, Vec<Candidate>>) {
        self.elections.set(elections);
        self.candidates.set(candidates);
    }

    /// Drop cached dashboard data, used on logout
    pub fn reset_dashboard(&self) {
        self.elections.set(Vec::new());
        self.candidates.set(HashMap::new());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
