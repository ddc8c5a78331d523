//! Route Access Policy
//!
//! The application's routes, segregated by who may open them. The same three tiers
//! the backend enforces are mirrored here so the client never renders a view the
//! session is not allowed to see:
//!
//! * `public` - reachable without a session.
//! * `authenticated` - any signed-in user; role dashboards only for their own role.
//! * `admin` - management views for teachers and admins, user administration for
//!   admins only.
//!
//! `RouteTable::guard` is the single decision point consulted before a view renders.

use std::collections::BTreeMap;

use crate::models::{Role, User};
use crate::session::{LOGIN_ROUTE, SessionService};

/// Routes accessible without a session.
pub mod public;

/// Routes requiring a signed-in user.
pub mod authenticated;

/// Management routes restricted to staff roles.
pub mod admin;

pub const HOME: &str = "/";
pub const DASHBOARD: &str = "/dashboard";
pub const STUDENT_DASHBOARD: &str = "/dashboard/student";
pub const TEACHER_DASHBOARD: &str = "/dashboard/teacher";
pub const ADMIN_DASHBOARD: &str = "/dashboard/admin";

/// Roles allowed on the staff management routes.
pub const STAFF: &[Role] = &[Role::Teacher, Role::Admin];

/// landing_route
///
/// The dashboard a role lands on after sign-in. `None` for unrecognised roles; the
/// caller picks the fallback.
pub fn landing_route(role: Role) -> Option<&'static str> {
    match role {
        Role::Student => Some(STUDENT_DASHBOARD),
        Role::Teacher => Some(TEACHER_DASHBOARD),
        Role::Admin => Some(ADMIN_DASHBOARD),
        Role::Unknown => None,
    }
}

/// RouteAccess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// `/` and `/dashboard`: never rendered, always forwarded to the role dashboard.
    Landing,
    Authenticated,
    /// Signed in with one of these roles.
    Roles(&'static [Role]),
}

/// Route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub access: RouteAccess,
}

impl Route {
    pub const fn new(path: &'static str, access: RouteAccess) -> Self {
        Self { path, access }
    }
}

/// RouteDecision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The session is still being resolved; show a loading indicator.
    Loading,
    Render,
    Redirect(String),
}

/// RouteTable
///
/// All known routes, keyed by path.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: BTreeMap<&'static str, RouteAccess>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    pub fn new() -> Self {
        let routes = public::public_routes()
            .into_iter()
            .chain(authenticated::authenticated_routes())
            .chain(admin::admin_routes())
            .map(|route| (route.path, route.access))
            .collect();
        Self { routes }
    }

    /// Access rule for `path` (query string and trailing slash ignored).
    pub fn access(&self, path: &str) -> Option<RouteAccess> {
        self.routes.get(normalize(path)).copied()
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    /// guard
    ///
    /// Decides what happens when the user opens `path` with the given session.
    pub fn guard(&self, path: &str, session: &SessionService) -> RouteDecision {
        let user = if session.is_authenticated() {
            session.current_user()
        } else {
            None
        };
        self.decide(path, session.is_loading(), user.as_ref())
    }

    /// The decision itself, over plain session facts.
    pub fn decide(&self, path: &str, loading: bool, user: Option<&User>) -> RouteDecision {
        if loading {
            return RouteDecision::Loading;
        }

        let Some(access) = self.access(path) else {
            return RouteDecision::Redirect(HOME.to_string());
        };

        let user = match (access, user) {
            (RouteAccess::Public, _) => return RouteDecision::Render,
            (_, None) => return RouteDecision::Redirect(LOGIN_ROUTE.to_string()),
            (_, Some(user)) => user,
        };

        match access {
            RouteAccess::Landing => RouteDecision::Redirect(
                landing_route(user.role).unwrap_or(LOGIN_ROUTE).to_string(),
            ),
            RouteAccess::Roles(allowed) if !allowed.contains(&user.role) => {
                RouteDecision::Redirect(landing_route(user.role).unwrap_or(HOME).to_string())
            }
            _ => RouteDecision::Render,
        }
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => HOME,
        trimmed => trimmed,
    }
}
