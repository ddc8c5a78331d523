use super::{Route, RouteAccess};
use crate::session::LOGIN_ROUTE;

/// Public Routes
///
/// Views any visitor can open: the sign-in page and the document authenticity
/// check (`GET /certificates/verificar/{code}` needs no token).
pub fn public_routes() -> Vec<Route> {
    vec![
        Route::new(LOGIN_ROUTE, RouteAccess::Public),
        Route::new("/verify-document", RouteAccess::Public),
    ]
}
