//! Authenticated HTTP client for the Tavola backend

use crate::{ClientConfig, ClientError, ClientResult, token::TokenStore};
use reqwest::{Client, RequestBuilder, StatusCode, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Hook invoked when the backend rejects the session (401). The hosting
/// shell decides what "navigate to login" means.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client wrapping reqwest with bearer auth and the backend's
/// error-shape conventions
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration and an injected token store
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            on_unauthorized: None,
        }
    }

    /// Install the 401 notification hook
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    /// The injected token store
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential when a token is present
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        self.execute(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        self.execute(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        self.execute(request).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.delete(self.url(path)));
        self.execute(request).await
    }

    /// Make a POST request with a multipart form. No JSON content-type is
    /// set; the transport supplies the multipart boundary.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).multipart(form));
        self.execute(request).await
    }

    /// Make a PUT request with a multipart form
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).multipart(form));
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Evict the stale session for this and all future calls, then
            // let the host shell route back to the login screen.
            self.tokens.clear();
            tracing::warn!("backend rejected credentials, token evicted");
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ClientError::Unauthorized);
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        // Bodies are parsed as JSON regardless of status; an unparseable
        // body counts as empty rather than failing the call here.
        let body: Value = serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Default::default()));

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| ClientError::status_message(status.as_u16()));
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_value(body).map_err(Into::into)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
