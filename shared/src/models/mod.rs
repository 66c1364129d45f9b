//! Wire-level domain models
//!
//! Field names and casing mirror the backend payloads (camelCase, Mongo-style
//! `_id`). Status fields deserialize through the case-normalizing enums in
//! [`crate::status`].

pub mod analytics;
pub mod category;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod review;

pub use analytics::{DailyOrders, Overview, OverviewResponse, StatusBucket};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use menu_item::{ImageFile, ItemUpload, MenuItem};
pub use order::{ItemRef, ItemSnapshot, Order, OrderLine};
pub use reservation::Reservation;
pub use review::Review;
