//! In-memory backend state

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{Category, MenuItem, Reservation, Review};
use shared::status::{OrderStatus, ReservationStatus};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Stored order line; the wire shape is derived per request so a deleted
/// item naturally populates to null
#[derive(Debug, Clone)]
pub struct OrderLineRecord {
    pub id: String,
    pub item_id: String,
    pub quantity: u32,
    /// When false the raw item id is served as a bare string, simulating
    /// a failed populate upstream
    pub populated: bool,
}

/// Stored order
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLineRecord>,
}

/// Everything the mock backend owns
#[derive(Debug, Default)]
pub struct StoreData {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub orders: Vec<OrderRecord>,
    pub reservations: Vec<Reservation>,
    pub reviews: Vec<Review>,
    pub tokens: HashSet<String>,
}

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    pub data: RwLock<StoreData>,
    pub admin_email: String,
    pub admin_password: String,
}

pub type SharedState = Arc<AppState>;

/// Mint an opaque identifier in the backend's 24-hex-char style
pub fn mint_id() -> String {
    Uuid::new_v4().simple().to_string()[..24].to_string()
}

/// Mint an opaque bearer token
pub fn mint_token() -> String {
    Uuid::new_v4().simple().to_string()
}

impl AppState {
    pub fn new(admin_email: impl Into<String>, admin_password: impl Into<String>) -> SharedState {
        Arc::new(Self {
            data: RwLock::new(StoreData::default()),
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
        })
    }

    /// Default credentials plus a deterministic dataset covering every
    /// screen: three categories, four items, a pending order whose lines
    /// exercise all three item-reference shapes, enough completed orders
    /// to paginate, and a handful of reservations and reviews.
    pub fn seeded() -> SharedState {
        let state = Self::new("admin@tavola.test", "secret");
        {
            let mut data = state.data.try_write().expect("fresh state is uncontended");
            seed(&mut data);
        }
        state
    }
}

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("seed timestamp parses")
}

fn seed(data: &mut StoreData) {
    data.categories = vec![
        Category {
            id: "cat-starters".into(),
            name: "Starters".into(),
            description: "Small plates".into(),
            is_orderable: true,
            created_at: ts("2026-07-01T09:00:00Z"),
        },
        Category {
            id: "cat-mains".into(),
            name: "Mains".into(),
            description: "Hearty plates".into(),
            is_orderable: true,
            created_at: ts("2026-07-01T09:05:00Z"),
        },
        Category {
            id: "cat-desserts".into(),
            name: "Desserts".into(),
            description: String::new(),
            is_orderable: false,
            created_at: ts("2026-07-01T09:10:00Z"),
        },
    ];

    data.items = vec![
        MenuItem {
            id: "itm-bruschetta".into(),
            name: "Bruschetta".into(),
            price: Decimal::new(65, 1),
            description: "Grilled bread, tomato".into(),
            image: Some("/uploads/bruschetta.jpg".into()),
            available: true,
            category_id: Some("cat-starters".into()),
        },
        MenuItem {
            id: "itm-pasta".into(),
            name: "Pasta".into(),
            price: Decimal::new(95, 1),
            description: "Fresh egg pasta".into(),
            image: Some("/uploads/pasta.jpg".into()),
            available: true,
            category_id: Some("cat-mains".into()),
        },
        MenuItem {
            id: "itm-risotto".into(),
            name: "Risotto".into(),
            price: Decimal::new(120, 1),
            description: "Saffron risotto".into(),
            image: None,
            available: false,
            category_id: Some("cat-mains".into()),
        },
        MenuItem {
            id: "itm-tiramisu".into(),
            name: "Tiramisu".into(),
            price: Decimal::new(50, 1),
            description: "House tiramisu".into(),
            image: Some("/uploads/tiramisu.jpg".into()),
            available: true,
            category_id: Some("cat-desserts".into()),
        },
    ];

    // The pending order's three lines cover the populated, deleted and
    // unpopulated reference shapes.
    data.orders.push(OrderRecord {
        id: "ord-pending".into(),
        status: OrderStatus::Pending,
        total_amount: Decimal::new(190, 1),
        created_at: ts("2026-07-20T12:00:00Z"),
        lines: vec![
            OrderLineRecord {
                id: "line-populated".into(),
                item_id: "itm-pasta".into(),
                quantity: 2,
                populated: true,
            },
            OrderLineRecord {
                id: "line-deleted".into(),
                item_id: "itm-gone".into(),
                quantity: 1,
                populated: true,
            },
            OrderLineRecord {
                id: "line-unpopulated".into(),
                item_id: "itm-bruschetta".into(),
                quantity: 1,
                populated: false,
            },
        ],
    });

    data.orders.push(OrderRecord {
        id: "ord-preparing".into(),
        status: OrderStatus::Preparing,
        total_amount: Decimal::new(65, 1),
        created_at: ts("2026-07-20T12:30:00Z"),
        lines: vec![OrderLineRecord {
            id: "line-prep".into(),
            item_id: "itm-bruschetta".into(),
            quantity: 1,
            populated: true,
        }],
    });

    data.orders.push(OrderRecord {
        id: "ord-ready".into(),
        status: OrderStatus::Ready,
        total_amount: Decimal::new(50, 1),
        created_at: ts("2026-07-20T13:00:00Z"),
        lines: vec![OrderLineRecord {
            id: "line-ready".into(),
            item_id: "itm-tiramisu".into(),
            quantity: 1,
            populated: true,
        }],
    });

    // 25 completed orders so a limit-20 listing spills onto page two
    for i in 0..25u32 {
        let day = 14 + (i % 5);
        data.orders.push(OrderRecord {
            id: format!("ord-done-{i:02}"),
            status: OrderStatus::Completed,
            total_amount: Decimal::new(95, 1),
            created_at: ts(&format!("2026-07-{day:02}T18:{:02}:00Z", i % 60)),
            lines: vec![OrderLineRecord {
                id: format!("line-done-{i:02}"),
                item_id: "itm-pasta".into(),
                quantity: 1,
                populated: true,
            }],
        });
    }

    data.reservations = vec![
        Reservation {
            id: "res-pending".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+34 600 000 001".into(),
            people_count: 4,
            date: "2026-08-12".into(),
            time: "19:30".into(),
            status: ReservationStatus::Pending,
            special_request: Some("Window table".into()),
            created_at: ts("2026-07-18T10:00:00Z"),
        },
        Reservation {
            id: "res-confirmed".into(),
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            phone: "+34 600 000 002".into(),
            people_count: 2,
            date: "2026-08-13".into(),
            time: "20:00".into(),
            status: ReservationStatus::Confirmed,
            special_request: None,
            created_at: ts("2026-07-18T11:00:00Z"),
        },
        Reservation {
            id: "res-done".into(),
            name: "Alan Turing".into(),
            email: "alan@example.com".into(),
            phone: "+34 600 000 003".into(),
            people_count: 6,
            date: "2026-07-10".into(),
            time: "21:00".into(),
            status: ReservationStatus::Completed,
            special_request: None,
            created_at: ts("2026-07-01T12:00:00Z"),
        },
    ];

    data.reviews = vec![
        Review {
            id: "rev-1".into(),
            rating: 5,
            comment: "Great pasta".into(),
            user_name: "Nia".into(),
            created_at: ts("2026-07-15T18:00:00Z"),
        },
        Review {
            id: "rev-2".into(),
            rating: 2,
            comment: "Slow service".into(),
            user_name: "Max".into(),
            created_at: ts("2026-07-16T19:00:00Z"),
        },
    ];
}
