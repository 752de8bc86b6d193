//! Route table and navigation guard.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::auth::AuthSession;

/// Landing route, also the target of guard redirects.
pub const DASHBOARD: &str = "/dashboard";

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Leading path segment, `/` for the root.
    pub path: &'static str,
    pub name: &'static str,
    /// Accepts an optional trailing episode segment.
    pub takes_episode: bool,
    pub requires_auth: bool,
}

const fn route(path: &'static str, name: &'static str, takes_episode: bool, requires_auth: bool) -> Route {
    Route {
        path,
        name,
        takes_episode,
        requires_auth,
    }
}

pub static ROUTES: [Route; 9] = [
    route("/", "Home", false, false),
    route("/dashboard", "Dashboard", false, false),
    route("/rundown", "Rundown", true, false),
    route("/rundown-manager", "RundownManager", true, false),
    route("/content-editor", "ContentEditor", true, false),
    route("/assets", "Assets", false, false),
    route("/templates", "Templates", false, false),
    route("/settings", "Settings", false, false),
    route("/profile", "Profile", false, true),
];

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed(String),
    Redirect(String),
}

impl Navigation {
    /// Path the user ends up on.
    pub fn path(&self) -> &str {
        match self {
            Navigation::Proceed(path) | Navigation::Redirect(path) => path,
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Finds the route serving `path`, ignoring query and fragment.
pub fn match_route(path: &str) -> Option<&'static Route> {
    let segments = segments(path);
    let Some((first, rest)) = segments.split_first() else {
        return ROUTES.iter().find(|r| r.path == "/");
    };

    ROUTES.iter().find(|r| {
        r.path.trim_start_matches('/') == *first
            && (rest.is_empty() || (r.takes_episode && rest.len() == 1))
    })
}

/// Episode segment of a route path, if any.
pub fn episode_param(path: &str) -> Option<&str> {
    let segments = segments(path);
    match (match_route(path), segments.as_slice()) {
        (Some(route), [_, episode]) if route.takes_episode => Some(*episode),
        _ => None,
    }
}

fn static_redirect(path: &str) -> Option<String> {
    let route = match_route(path)?;
    match route.path {
        "/" => Some(DASHBOARD.to_string()),
        "/rundown-manager" => Some(match episode_param(path) {
            Some(episode) => format!("/rundown/{}", episode),
            None => "/rundown".to_string(),
        }),
        _ => None,
    }
}

/// Decides where a navigation to `path` lands.
///
/// Static redirects apply first. Routes that require authentication
/// re-validate the stored session and send anonymous users to the
/// dashboard. Unknown paths proceed unchanged.
pub fn navigate(path: &str, auth: &mut AuthSession, now: DateTime<Utc>) -> Navigation {
    if let Some(target) = static_redirect(path) {
        debug!(from = path, to = %target, "Route redirect");
        return Navigation::Redirect(target);
    }

    match match_route(path) {
        Some(route) if route.requires_auth && !auth.check_auth_status_at(now) => {
            info!(route = route.name, "Authentication required, redirecting");
            Navigation::Redirect(DASHBOARD.to_string())
        }
        _ => Navigation::Proceed(path.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use showbuild_models::{AccessLevel, User};
    use showbuild_persistence::MemoryStore;
    use std::sync::Arc;

    fn anonymous() -> AuthSession {
        AuthSession::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_root_redirects_to_dashboard() {
        let mut auth = anonymous();
        assert_eq!(
            navigate("/", &mut auth, Utc::now()),
            Navigation::Redirect("/dashboard".into())
        );
    }

    #[test]
    fn test_rundown_manager_redirects_with_episode() {
        let mut auth = anonymous();
        assert_eq!(
            navigate("/rundown-manager/0237", &mut auth, Utc::now()),
            Navigation::Redirect("/rundown/0237".into())
        );
        assert_eq!(
            navigate("/rundown-manager", &mut auth, Utc::now()).path(),
            "/rundown"
        );
    }

    #[test]
    fn test_profile_requires_auth() {
        let mut auth = anonymous();
        assert_eq!(
            navigate("/profile", &mut auth, Utc::now()),
            Navigation::Redirect("/dashboard".into())
        );
    }

    #[test]
    fn test_profile_with_valid_session() {
        let now = Utc::now();
        let mut auth = anonymous();
        auth.set_auth("tok", User::new("anchor", AccessLevel::User), now + Duration::hours(1))
            .unwrap();

        assert_eq!(
            navigate("/profile", &mut auth, now),
            Navigation::Proceed("/profile".into())
        );
        // Same session after expiry.
        assert_eq!(
            navigate("/profile", &mut auth, now + Duration::hours(2)).path(),
            "/dashboard"
        );
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_public_and_unknown_routes_proceed() {
        let mut auth = anonymous();
        for path in ["/dashboard", "/rundown/0237", "/content-editor", "/settings", "/nowhere"] {
            assert_eq!(navigate(path, &mut auth, Utc::now()), Navigation::Proceed(path.into()));
        }
    }

    #[test]
    fn test_match_route() {
        assert_eq!(match_route("/rundown/0237?tab=script").map(|r| r.name), Some("Rundown"));
        assert_eq!(match_route("/assets/").map(|r| r.name), Some("Assets"));
        assert!(match_route("/assets/extra").is_none());
        assert_eq!(episode_param("/content-editor/0240"), Some("0240"));
        assert_eq!(episode_param("/dashboard"), None);
    }
}
