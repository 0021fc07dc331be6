//! View Routing
//!
//! Selects which exclusive top-level screen is visible. The view is a pure
//! projection of session state, recomputed on every session transition and
//! never stored on its own.

use super::session::Session;

/// The three top-level screens. There are no sub-states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Anonymous landing page with login/register entry points
    Landing,
    /// Voter dashboard listing active elections
    UserDashboard,
    /// Admin dashboard for managing elections
    AdminDashboard,
}

/// Compute the visible view from the current session.
pub fn route(session: Option<&Session>) -> View {
    match session {
        None => View::Landing,
        Some(s) if s.is_admin => View::AdminDashboard,
        Some(_) => View::UserDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(is_admin: bool) -> Session {
        Session {
            token: "tok".to_string(),
            username: "alice".to_string(),
            is_admin,
        }
    }

    #[test]
    fn no_session_routes_to_landing() {
        assert_eq!(route(None), View::Landing);
    }

    #[test]
    fn voter_session_routes_to_user_dashboard() {
        assert_eq!(route(Some(&session(false))), View::UserDashboard);
    }

    #[test]
    fn admin_session_routes_to_admin_dashboard() {
        assert_eq!(route(Some(&session(true))), View::AdminDashboard);
    }
}
