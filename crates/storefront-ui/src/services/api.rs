//! HTTP client helpers (REST).

use gloo::console;
use gloo_net::http::Request;
use storefront_api_models::{
    AuthError, AuthFields, AuthenticatedUser, FormMode, UserRole, auth_endpoint,
    decode_auth_response,
};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Sign in or register; the endpoint is picked from role and mode.
    pub(crate) async fn authenticate(
        &self,
        fields: &AuthFields,
        role: UserRole,
        mode: FormMode,
    ) -> Result<AuthenticatedUser, AuthError> {
        let url = self.url(&auth_endpoint(role, mode));
        let result = post_credentials(&url, fields).await;
        match &result {
            Err(err) if err.is_transport() => {
                console::error!("auth request failed", url, err.to_string());
            }
            Err(err) => console::info!("auth request rejected", url, err.to_string()),
            Ok(_) => {}
        }
        result
    }
}

async fn post_credentials(url: &str, fields: &AuthFields) -> Result<AuthenticatedUser, AuthError> {
    let response = Request::post(url)
        .json(fields)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    decode_auth_response(status, &body)
}

fn transport(err: gloo_net::Error) -> AuthError {
    AuthError::Transport {
        detail: err.to_string(),
    }
}
