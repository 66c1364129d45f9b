//! Admin session lifecycle
//!
//! Ties the API facade to the token store: login/logout, route guarding,
//! confirmation-gated destructive actions and await-then-refetch mutation
//! helpers. The displayed list after an action always reflects that
//! action because the refetch is sequenced after the mutation completes.

use crate::http::UnauthorizedHook;
use crate::token::{FileTokenStore, TokenStore};
use crate::{AdminApi, ClientConfig, ClientResult, HttpClient, Route};
use shared::models::{Order, Reservation};
use shared::status::{OrderStatus, ReservationStatus};
use std::sync::Arc;

/// Outcome of the user-facing confirmation step that precedes every
/// destructive action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// A logged-in (or about-to-log-in) admin console session
#[derive(Clone)]
pub struct AdminSession {
    api: AdminApi,
    tokens: Arc<dyn TokenStore>,
}

impl AdminSession {
    pub fn new(api: AdminApi, tokens: Arc<dyn TokenStore>) -> Self {
        Self { api, tokens }
    }

    /// Build a session over the file-backed token store at the configured
    /// path. A token persisted by an earlier run keeps the session
    /// logged in until the backend says otherwise.
    pub fn connect(config: &ClientConfig) -> Self {
        let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.token_path));
        let http = HttpClient::new(config, Arc::clone(&tokens));
        Self {
            api: AdminApi::new(http),
            tokens,
        }
    }

    /// Install the hook fired when the backend evicts the session
    pub fn with_unauthorized_hook(self, hook: UnauthorizedHook) -> Self {
        let http = self.api.http().clone().with_unauthorized_hook(hook);
        Self {
            api: AdminApi::new(http),
            tokens: self.tokens,
        }
    }

    pub fn api(&self) -> &AdminApi {
        &self.api
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.get().is_some()
    }

    // ========== Auth ==========

    /// Log in and store the issued token. On failure nothing is stored
    /// and the caller stays on the login screen.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Route> {
        let response = self.api.login(email, password).await?;
        self.tokens.set(&response.token);
        tracing::info!("admin login succeeded");
        Ok(Route::Dashboard)
    }

    /// Drop the live session
    pub fn logout(&self) {
        self.tokens.clear();
    }

    /// Resolve a requested path against the session state
    pub fn resolve(&self, path: &str) -> Route {
        Route::parse(path).guard(self.is_logged_in())
    }

    // ========== Confirmation-gated destructive actions ==========
    // Ok(false) means the user backed out and no request was issued.

    pub async fn delete_category(&self, id: &str, confirmation: Confirmation) -> ClientResult<bool> {
        if confirmation == Confirmation::Cancelled {
            return Ok(false);
        }
        self.api.delete_category(id).await?;
        Ok(true)
    }

    pub async fn delete_item(&self, id: &str, confirmation: Confirmation) -> ClientResult<bool> {
        if confirmation == Confirmation::Cancelled {
            return Ok(false);
        }
        self.api.delete_item(id).await?;
        Ok(true)
    }

    pub async fn delete_review(&self, id: &str, confirmation: Confirmation) -> ClientResult<bool> {
        if confirmation == Confirmation::Cancelled {
            return Ok(false);
        }
        self.api.delete_review(id).await?;
        Ok(true)
    }

    // ========== Mutation helpers ==========

    /// Apply an order status transition, then refetch the order so the
    /// screen shows the post-transition state. The transition tables gate
    /// what a screen offers; the backend still rejects illegal moves.
    pub async fn transition_order(&self, id: &str, next: OrderStatus) -> ClientResult<Order> {
        self.api.update_order_status(id, next).await?;
        Ok(self.api.order(id).await?.order)
    }

    /// Apply a reservation status transition, then refetch
    pub async fn transition_reservation(
        &self,
        id: &str,
        next: ReservationStatus,
    ) -> ClientResult<Reservation> {
        self.api.update_reservation_status(id, next).await?;
        Ok(self.api.reservation(id).await?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    fn offline_session(tokens: Arc<dyn TokenStore>) -> AdminSession {
        // Port 9 is discard; nothing should ever connect in these tests
        let config = ClientConfig::new("http://127.0.0.1:9");
        let http = HttpClient::new(&config, Arc::clone(&tokens));
        AdminSession::new(AdminApi::new(http), tokens)
    }

    #[tokio::test]
    async fn cancelled_confirmation_issues_no_request() {
        let session = offline_session(Arc::new(MemoryTokenStore::with_token("tok")));
        // Would hit the unreachable backend if a request were issued
        let deleted = session
            .delete_category("c1", Confirmation::Cancelled)
            .await
            .unwrap();
        assert!(!deleted);
    }

    #[test]
    fn resolve_guards_protected_routes() {
        let session = offline_session(Arc::new(MemoryTokenStore::new()));
        assert_eq!(session.resolve("/admin/orders"), Route::Login);
        assert_eq!(session.resolve("/"), Route::Login);

        let session = offline_session(Arc::new(MemoryTokenStore::with_token("tok")));
        assert_eq!(session.resolve("/admin/orders"), Route::Orders);
        assert_eq!(session.resolve("/nope"), Route::NotFound);
    }

    #[test]
    fn logout_clears_the_token() {
        let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("tok"));
        let session = offline_session(Arc::clone(&tokens));
        assert!(session.is_logged_in());
        session.logout();
        assert!(!session.is_logged_in());
        assert!(tokens.get().is_none());
    }
}
