use super::segment;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::Certificate;

/// Shown when a verification code is rejected without a backend message.
pub const VERIFY_FAILED: &str = "Documento não encontrado ou código inválido.";

/// CertificatesApi
///
/// Public document authenticity check. Works without a session.
pub struct CertificatesApi<'a> {
    api: &'a ApiClient,
}

impl<'a> CertificatesApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET /certificates/verificar/{code}
    pub async fn verify(&self, code: &str) -> Result<Certificate, ApiError> {
        self.api
            .get_item(&format!("/certificates/verificar/{}", segment(code.trim())))
            .await
    }
}
