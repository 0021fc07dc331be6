//! Results Panel
//!
//! Tallied results for one election: summary line, vote-distribution chart,
//! and a ranking table.

use leptos::*;

use crate::api::{CandidateResult, ElectionResults};

use super::chart::ResultsChart;

/// Results dialog body
#[component]
pub fn ResultsPanel(results: ElectionResults) -> impl IntoView {
    let total = results.total_votes;
    let rows = ranked(&results.results);

    view! {
        <div class="space-y-4">
            <div>
                <h4 class="text-lg font-semibold">{results.election_title.clone()}</h4>
                <p class="text-gray-400">{format!("Total Votes: {}", total)}</p>
            </div>

            <ResultsChart results=results.results.clone() />

            <table class="w-full text-sm text-left">
                <thead>
                    <tr class="text-gray-400 border-b border-gray-700">
                        <th class="py-2">"Rank"</th>
                        <th class="py-2">"Candidate"</th>
                        <th class="py-2">"Votes"</th>
                        <th class="py-2">"Percentage"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .enumerate()
                        .map(|(idx, row)| view! {
                            <tr class="border-b border-gray-700 last:border-0">
                                <td class="py-2 font-semibold">{format!("#{}", idx + 1)}</td>
                                <td class="py-2">{row.candidate_name}</td>
                                <td class="py-2">{row.vote_count}</td>
                                <td class="py-2 text-indigo-400">
                                    {format!("{}%", percentage(row.vote_count, total))}
                                </td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Candidates ordered by vote count, highest first
fn ranked(results: &[CandidateResult]) -> Vec<CandidateResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    sorted
}

/// Share of the total as a one-decimal string, "0.0" for an empty tally
fn percentage(count: u32, total: u32) -> String {
    if total == 0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", (count as f64 / total as f64) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(name: &str, votes: u32) -> CandidateResult {
        CandidateResult {
            candidate_name: name.to_string(),
            vote_count: votes,
        }
    }

    #[test]
    fn ranking_sorts_descending() {
        let rows = ranked(&[tally("a", 1), tally("b", 5), tally("c", 3)]);
        let names: Vec<_> = rows.iter().map(|r| r.candidate_name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), "0.0");
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1, 3), "33.3");
        assert_eq!(percentage(2, 3), "66.7");
        assert_eq!(percentage(7, 7), "100.0");
    }
}
