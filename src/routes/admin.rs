use super::{Route, RouteAccess, STAFF};
use crate::models::Role;

/// Admin Routes
///
/// Management views. Teachers and admins create grades, lessons and exams, register
/// attendance and manage courses and student documents; user administration is
/// admins only.
pub fn admin_routes() -> Vec<Route> {
    vec![
        Route::new("/grades/new", RouteAccess::Roles(STAFF)),
        Route::new("/attendance/register", RouteAccess::Roles(STAFF)),
        Route::new("/lessons/new", RouteAccess::Roles(STAFF)),
        Route::new("/exams/new", RouteAccess::Roles(STAFF)),
        Route::new("/admin/courses", RouteAccess::Roles(STAFF)),
        Route::new("/admin/documents", RouteAccess::Roles(STAFF)),
        Route::new("/admin/users", RouteAccess::Roles(&[Role::Admin])),
    ]
}
