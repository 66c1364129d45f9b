//! Shared types for the Tavola admin platform
//!
//! Wire-level domain models, status state machines and response envelopes
//! used by both the admin client and the mock backend.

pub mod client;
pub mod models;
pub mod response;
pub mod status;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Status machine re-exports (for convenient access)
pub use status::{OrderStatus, ReservationStatus};

// Response re-exports
pub use response::{
    Ack, CategoriesResponse, ItemsPage, OrderEnvelope, OrdersPage, ReservationResponse,
    ReservationsPage, ReviewsPage,
};
