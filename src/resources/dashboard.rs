use super::segment;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Dashboard, Role};

/// DashboardApi
///
/// Per-role dashboard summaries. The payload differs per role and is kept as an
/// open map.
pub struct DashboardApi<'a> {
    api: &'a ApiClient,
}

impl<'a> DashboardApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /dashboard/{role}
    pub async fn for_role(&self, role: Role) -> Result<Dashboard, ApiError> {
        self.api
            .get_item(&format!("/dashboard/{}", segment(role.as_str())))
            .await
    }

    pub async fn student(&self) -> Result<Dashboard, ApiError> {
        self.for_role(Role::Student).await
    }

    pub async fn teacher(&self) -> Result<Dashboard, ApiError> {
        self.for_role(Role::Teacher).await
    }

    pub async fn admin(&self) -> Result<Dashboard, ApiError> {
        self.for_role(Role::Admin).await
    }
}
