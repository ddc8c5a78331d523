use super::{
    ADMIN_DASHBOARD, DASHBOARD, HOME, Route, RouteAccess, STUDENT_DASHBOARD, TEACHER_DASHBOARD,
};
use crate::models::Role;

/// Authenticated Routes
///
/// Views open to any signed-in user. Each role dashboard is restricted to its own
/// role; opening another role's dashboard forwards to yours.
pub fn authenticated_routes() -> Vec<Route> {
    vec![
        // Role-based redirect entry points.
        Route::new(HOME, RouteAccess::Landing),
        Route::new(DASHBOARD, RouteAccess::Landing),
        // --- Dashboards ---
        Route::new(STUDENT_DASHBOARD, RouteAccess::Roles(&[Role::Student])),
        Route::new(TEACHER_DASHBOARD, RouteAccess::Roles(&[Role::Teacher])),
        Route::new(ADMIN_DASHBOARD, RouteAccess::Roles(&[Role::Admin])),
        // --- Common features ---
        Route::new("/profile", RouteAccess::Authenticated),
        Route::new("/messages", RouteAccess::Authenticated),
        Route::new("/calendar", RouteAccess::Authenticated),
        Route::new("/grades", RouteAccess::Authenticated),
        Route::new("/lessons", RouteAccess::Authenticated),
        Route::new("/exams", RouteAccess::Authenticated),
        Route::new("/attendance", RouteAccess::Authenticated),
        Route::new("/attendance/calendar", RouteAccess::Authenticated),
        // --- Documents ---
        Route::new("/documents", RouteAccess::Authenticated),
        Route::new("/documents/upload", RouteAccess::Authenticated),
    ]
}
