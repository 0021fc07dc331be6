//! Configuration
//!
//! Backend endpoint map and local-storage keys.

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Storage key for the serialized session record
pub const SESSION_KEY: &str = "voteboard_session";

/// Storage key for the API base URL override
const API_URL_KEY: &str = "voteboard_api_url";

/// Backend endpoint paths, joined onto [`api_base`] by the API client.
pub mod endpoints {
    pub const REGISTER: &str = "/api/register";
    pub const LOGIN: &str = "/api/login";
    pub const ELECTIONS: &str = "/api/elections";
    pub const VOTE: &str = "/api/vote";
    pub const ADMIN_ELECTION: &str = "/api/admin/election";
    pub const ADMIN_CANDIDATE: &str = "/api/admin/candidate";
    pub const ADMIN_START: &str = "/api/admin/start";
    pub const ADMIN_RESULTS: &str = "/api/admin/results";
}

/// Get the API base URL, honoring a local-storage override when present.
///
/// The override key is written by operators from the browser console when
/// pointing a deployed dashboard at a non-default backend.
pub fn api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}
