//! Voteboard Dashboard
//!
//! Browser dashboard for an election-voting platform, built with Leptos (WASM).
//!
//! # Features
//!
//! - Voter dashboard: browse active elections and cast votes
//! - Admin dashboard: create elections, add candidates, start elections
//! - Tallied results with a vote-distribution chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All tallying, persistence, and authentication live in the
//! voting REST backend; this crate is a thin client over it. Which top-level
//! view is visible is derived from the locally persisted session.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
