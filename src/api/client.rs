//! HTTP API Client
//!
//! Functions for communicating with the voting REST API.
//!
//! Every call is one-shot: no retries, no caching, no special timeout. All
//! failure modes (unreachable host, non-success status, malformed body) are
//! reported through the single `Err(String)` channel, carrying the server's
//! `detail` message when one is present.

use gloo_net::http::{Request, Response};

use crate::config::{self, endpoints};

// ============ Wire Types ============

/// Election record as returned by the backend
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Election {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// Candidate record as returned by the backend
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Candidate {
    pub id: u32,
    pub election_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response to a successful login or registration
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub is_admin: bool,
}

/// Tallied results for one election
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ElectionResults {
    pub election_title: String,
    pub total_votes: u32,
    pub results: Vec<CandidateResult>,
}

/// Per-candidate tally inside [`ElectionResults`]
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CandidateResult {
    pub candidate_name: String,
    pub vote_count: u32,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

// ============ Request plumbing ============

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Map a non-success response body to the user-facing message.
///
/// The backend reports failures as `{"detail": "..."}`; anything else gets a
/// generic message carrying the status code.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| format!("Request failed (status {})", status))
}

/// Statuses whose body is empty by contract; parsing them as JSON would fail.
fn is_empty_success(status: u16) -> bool {
    status == 204
}

async fn response_error(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(status, &body)
}

/// Parse a JSON success body, or surface the server error.
async fn into_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(response_error(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Resolve to a success marker, never touching the body of an empty response.
async fn into_success(response: Response) -> Result<(), String> {
    if is_empty_success(response.status()) {
        return Ok(());
    }
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

// ============ Authentication ============

/// Login payload; exactly one of `username`/`email` is sent.
#[derive(Debug, serde::Serialize)]
struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    password: String,
}

/// An identifier containing `@` is treated as an email address.
fn login_request(identifier: &str, password: &str) -> LoginRequest {
    if identifier.contains('@') {
        LoginRequest {
            username: None,
            email: Some(identifier.to_string()),
            password: password.to_string(),
        }
    } else {
        LoginRequest {
            username: Some(identifier.to_string()),
            email: None,
            password: password.to_string(),
        }
    }
}

/// Register a new account
pub async fn register(username: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        username: String,
        email: String,
        password: String,
    }

    let url = format!("{}{}", config::api_base(), endpoints::REGISTER);

    let response = Request::post(&url)
        .json(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_json(response).await
}

/// Log in with a username or email
pub async fn login(identifier: &str, password: &str) -> Result<AuthResponse, String> {
    let url = format!("{}{}", config::api_base(), endpoints::LOGIN);

    let response = Request::post(&url)
        .json(&login_request(identifier, password))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_json(response).await
}

// ============ Elections ============

/// Fetch the election listing.
///
/// The backend exposes only the active-elections listing; the admin dashboard
/// reuses it, so inactive elections created elsewhere may be invisible there.
pub async fn fetch_elections(token: &str) -> Result<Vec<Election>, String> {
    let url = format!("{}{}", config::api_base(), endpoints::ELECTIONS);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_json(response).await
}

/// Fetch the candidates of one election
pub async fn fetch_candidates(token: &str, election_id: u32) -> Result<Vec<Candidate>, String> {
    let url = format!(
        "{}{}/{}/candidates",
        config::api_base(),
        endpoints::ELECTIONS,
        election_id
    );

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_json(response).await
}

/// Cast a vote for a candidate
pub async fn cast_vote(token: &str, election_id: u32, candidate_id: u32) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct VoteRequest {
        election_id: u32,
        candidate_id: u32,
    }

    let url = format!("{}{}", config::api_base(), endpoints::VOTE);

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(&VoteRequest {
            election_id,
            candidate_id,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_success(response).await
}

// ============ Administration ============

/// Create a new election
pub async fn create_election(
    token: &str,
    title: &str,
    description: &str,
    is_active: bool,
) -> Result<Election, String> {
    #[derive(serde::Serialize)]
    struct CreateElectionRequest {
        title: String,
        description: String,
        is_active: bool,
    }

    let url = format!("{}{}", config::api_base(), endpoints::ADMIN_ELECTION);

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(&CreateElectionRequest {
            title: title.to_string(),
            description: description.to_string(),
            is_active,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_json(response).await
}

/// Add a candidate to an election
pub async fn add_candidate(
    token: &str,
    election_id: u32,
    name: &str,
    description: &str,
) -> Result<Candidate, String> {
    #[derive(serde::Serialize)]
    struct AddCandidateRequest {
        election_id: u32,
        name: String,
        description: String,
    }

    let url = format!("{}{}", config::api_base(), endpoints::ADMIN_CANDIDATE);

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(&AddCandidateRequest {
            election_id,
            name: name.to_string(),
            description: description.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_json(response).await
}

/// Open an election for voting
pub async fn start_election(token: &str, election_id: u32) -> Result<(), String> {
    let url = format!(
        "{}{}/{}",
        config::api_base(),
        endpoints::ADMIN_START,
        election_id
    );

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_success(response).await
}

/// Fetch tallied results for an election
pub async fn fetch_results(token: &str, election_id: u32) -> Result<ElectionResults, String> {
    let url = format!(
        "{}{}/{}",
        config::api_base(),
        endpoints::ADMIN_RESULTS,
        election_id
    );

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_uses_server_detail() {
        assert_eq!(error_message(400, "{\"detail\": \"X\"}"), "X");
    }

    #[test]
    fn error_message_falls_back_without_body() {
        assert_eq!(error_message(500, ""), "Request failed (status 500)");
    }

    #[test]
    fn error_message_falls_back_on_garbage() {
        assert_eq!(
            error_message(502, "<html>bad gateway</html>"),
            "Request failed (status 502)"
        );
        assert_eq!(
            error_message(400, "{\"message\": \"other shape\"}"),
            "Request failed (status 400)"
        );
    }

    #[test]
    fn no_content_skips_json_parsing() {
        assert!(is_empty_success(204));
        assert!(!is_empty_success(200));
        assert!(!is_empty_success(201));
    }

    #[test]
    fn login_discriminates_email_from_username() {
        let by_email = login_request("alice@example.com", "pw");
        assert_eq!(by_email.email.as_deref(), Some("alice@example.com"));
        assert_eq!(by_email.username, None);

        let by_name = login_request("alice", "pw");
        assert_eq!(by_name.username.as_deref(), Some("alice"));
        assert_eq!(by_name.email, None);
    }

    #[test]
    fn login_request_serializes_one_identifier() {
        let body = serde_json::to_string(&login_request("alice", "pw")).unwrap();
        assert!(body.contains("\"username\""));
        assert!(!body.contains("\"email\""));
    }
}
