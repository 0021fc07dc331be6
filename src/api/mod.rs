//! API Gateway
//!
//! Typed functions over the voting backend's REST surface.

pub mod client;

pub use client::{
    add_candidate, cast_vote, create_election, fetch_candidates, fetch_elections, fetch_results,
    login, register, start_election, AuthResponse, Candidate, CandidateResult, Election,
    ElectionResults,
};
