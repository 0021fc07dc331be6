//! Pages
//!
//! Top-level view components and their controllers.

pub mod admin;
pub mod landing;
pub mod user;

pub use admin::AdminDashboard;
pub use landing::Landing;
pub use user::UserDashboard;

use std::collections::HashMap;

use leptos::*;

use crate::api::{self, Candidate, Election};

/// Fetch the election listing and the candidates of every listed election.
///
/// Both dashboards replace their caches with the result wholesale; partial
/// data is never kept when any of the fetches fails.
pub(crate) async fn fetch_elections_with_candidates(
    token: &str,
) -> Result<(Vec<Election>, HashMap<u32, Vec<Candidate>>), String> {
    let elections = api::fetch_elections(token).await?;

    let mut candidates = HashMap::new();
    for election in &elections {
        let list = api::fetch_candidates(token, election.id).await?;
        candidates.insert(election.id, list);
    }

    Ok((elections, candidates))
}

/// Active/inactive pill shown on election cards
#[component]
pub(crate) fn StatusBadge(is_active: bool) -> impl IntoView {
    let (label, class) = if is_active {
        ("Active", "bg-green-900/60 text-green-400")
    } else {
        ("Inactive", "bg-gray-700 text-gray-400")
    };

    view! {
        <span class=format!("px-3 py-1 rounded-full text-xs font-medium {}", class)>
            {label}
        </span>
    }
}

/// Format a backend timestamp for display, falling back to the raw string
pub(crate) fn format_date(raw: &str) -> String {
    raw.parse::<chrono::NaiveDateTime>()
        .map(|dt| dt.format("%B %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_handles_backend_timestamps() {
        assert_eq!(
            format_date("2026-08-07T09:30:00"),
            "August 7, 2026 09:30"
        );
        assert_eq!(
            format_date("2026-01-02T18:05:00.123456"),
            "January 2, 2026 18:05"
        );
    }

    #[test]
    fn format_date_passes_through_unparseable_input() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
