//! Tavola Client - admin console client for the Tavola ordering backend
//!
//! Provides the authenticated HTTP layer, the per-endpoint API facade,
//! per-screen view models and the session lifecycle (login, logout,
//! forced re-authentication on 401).

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod route;
pub mod session;
pub mod token;
pub mod view;

pub use api::{AdminApi, OrderFilter};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, UnauthorizedHook};
pub use route::Route;
pub use session::{AdminSession, Confirmation};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::status::{OrderStatus, ReservationStatus};
