//! Mock REST surface
//!
//! Serves the backend contract the admin client consumes: bearer-guarded
//! `/admin` routes, capitalized statuses and `_id` keys on the wire,
//! server-side transition legality checks, and an enveloped analytics
//! overview.

use crate::state::{OrderRecord, SharedState, mint_id, mint_token};
use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use shared::client::LoginRequest;
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, DailyOrders, ItemRef, ItemSnapshot, MenuItem, Order,
    OrderLine, Overview, StatusBucket,
};
use shared::response::{Ack, CategoriesResponse, ItemsPage, OrdersPage, ReservationsPage, ReviewsPage};
use shared::status::{OrderStatus, ReservationStatus};
use std::collections::BTreeMap;

type ApiError = (StatusCode, Json<Value>);

fn err(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "message": message.into() })))
}

fn not_found(what: &str) -> ApiError {
    err(StatusCode::NOT_FOUND, format!("{what} not found"))
}

/// Build the full mock router over the given state
pub fn router(state: SharedState) -> Router {
    let protected = Router::new()
        .route("/admin/analytics/overview", get(overview))
        .route("/admin/menu/categories", get(list_categories))
        .route("/admin/menu/category", post(create_category))
        .route(
            "/admin/menu/category/{id}",
            put(update_category).delete(delete_category),
        )
        .route(
            "/admin/menu/categories/{category_id}/items",
            get(list_category_items).post(create_item),
        )
        .route("/admin/menu/items/{id}", put(update_item).delete(delete_item))
        .route("/admin/orders", get(list_orders))
        .route("/admin/orders/{id}", get(get_order))
        .route("/admin/orders/{id}/status", put(update_order_status))
        .route("/admin/reservations", get(list_reservations))
        .route("/admin/reservation/{id}", get(get_reservation))
        .route("/admin/reservation/{id}/status", put(update_reservation_status))
        .route("/admin/reviews", get(list_reviews))
        .route("/admin/reviews/{id}", delete(delete_review))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/admin/login", post(login))
        .merge(protected)
        .with_state(state)
}

/// Reject any request whose bearer token was not issued by `login`
async fn require_auth(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);

    let authorized = match token {
        Some(token) => state.data.read().await.tokens.contains(&token),
        None => false,
    };

    if authorized {
        next.run(request).await
    } else {
        err(StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<u32>,
    limit: Option<u32>,
    status: Option<String>,
}

fn paginate<T: Clone>(records: &[T], page: u32, limit: u32) -> (Vec<T>, u32) {
    let limit = limit.max(1) as usize;
    let page = page.max(1);
    let total_pages = records.len().div_ceil(limit) as u32;
    let slice = records
        .iter()
        .skip((page as usize - 1) * limit)
        .take(limit)
        .cloned()
        .collect();
    (slice, total_pages)
}

// ========== Auth ==========

async fn login(
    State(state): State<SharedState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.email == state.admin_email && request.password == state.admin_password {
        let token = mint_token();
        state.data.write().await.tokens.insert(token.clone());
        tracing::info!(email = %request.email, "admin logged in");
        Ok(Json(json!({ "success": true, "token": token })))
    } else {
        tracing::warn!(email = %request.email, "login rejected");
        Err(err(StatusCode::UNAUTHORIZED, "Invalid credentials"))
    }
}

// ========== Analytics ==========

async fn overview(State(state): State<SharedState>) -> Json<Value> {
    let data = state.data.read().await;

    let mut by_status: BTreeMap<&'static str, u64> = BTreeMap::new();
    for order in &data.orders {
        *by_status.entry(order.status.capitalized()).or_default() += 1;
    }

    let mut by_day: BTreeMap<NaiveDate, (u64, Decimal)> = BTreeMap::new();
    for order in &data.orders {
        let entry = by_day.entry(order.created_at.date_naive()).or_default();
        entry.0 += 1;
        entry.1 += order.total_amount;
    }

    let overview = Overview {
        total_orders: data.orders.len() as u64,
        total_revenue: data.orders.iter().map(|o| o.total_amount).sum(),
        total_reservations: data.reservations.len() as u64,
        active_reservations: data
            .reservations
            .iter()
            .filter(|r| {
                matches!(r.status, ReservationStatus::Pending | ReservationStatus::Confirmed)
            })
            .count() as u64,
        orders_by_status: by_status
            .into_iter()
            .map(|(status, count)| StatusBucket {
                status: Some(status.to_string()),
                count,
            })
            .collect(),
        daily_orders: by_day
            .iter()
            .rev()
            .take(7)
            .rev()
            .map(|(date, (orders, revenue))| DailyOrders {
                date: date.format("%Y-%m-%d").to_string(),
                day: date.format("%a").to_string(),
                orders: *orders,
                revenue: *revenue,
            })
            .collect(),
    };

    // Served enveloped; the client tolerates flat as well
    Json(json!({ "data": overview }))
}

// ========== Menu categories ==========

async fn list_categories(State(state): State<SharedState>) -> Json<CategoriesResponse> {
    let data = state.data.read().await;
    Json(CategoriesResponse {
        success: true,
        categories: data.categories.clone(),
    })
}

async fn create_category(
    State(state): State<SharedState>,
    Json(payload): Json<CategoryCreate>,
) -> Result<Json<Value>, ApiError> {
    let category = Category {
        id: mint_id(),
        name: payload.name,
        description: payload.description,
        is_orderable: payload.is_orderable,
        created_at: chrono::Utc::now(),
    };
    state.data.write().await.categories.push(category.clone());
    Ok(Json(json!({ "success": true, "category": category })))
}

async fn update_category(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> Result<Json<Value>, ApiError> {
    let mut data = state.data.write().await;
    let category = data
        .categories
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| not_found("Category"))?;
    if let Some(name) = payload.name {
        category.name = name;
    }
    if let Some(description) = payload.description {
        category.description = description;
    }
    if let Some(is_orderable) = payload.is_orderable {
        category.is_orderable = is_orderable;
    }
    Ok(Json(json!({ "success": true, "category": category.clone() })))
}

async fn delete_category(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    let mut data = state.data.write().await;
    let before = data.categories.len();
    data.categories.retain(|c| c.id != id);
    if data.categories.len() == before {
        return Err(not_found("Category"));
    }
    Ok(Json(Ack {
        success: true,
        message: Some("Category deleted".into()),
    }))
}

// ========== Menu items ==========

async fn list_category_items(
    State(state): State<SharedState>,
    Path(category_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Json<ItemsPage> {
    let data = state.data.read().await;
    let items: Vec<MenuItem> = data
        .items
        .iter()
        .filter(|item| item.category_id.as_deref() == Some(category_id.as_str()))
        .cloned()
        .collect();
    let page = params.page.unwrap_or(1);
    let (items, total_pages) = paginate(&items, page, params.limit.unwrap_or(10));
    Json(ItemsPage {
        success: true,
        items,
        current_page: page,
        total_pages,
    })
}

#[derive(Debug, Default)]
struct ItemForm {
    name: Option<String>,
    price: Option<Decimal>,
    description: Option<String>,
    available: Option<bool>,
    category_id: Option<String>,
    image: Option<String>,
}

async fn read_item_form(mut multipart: Multipart) -> Result<ItemForm, ApiError> {
    let mut form = ItemForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| err(StatusCode::BAD_REQUEST, "Malformed multipart form"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().map(str::to_owned);
                // Bytes are accepted and dropped; only the reference is kept
                let _ = field
                    .bytes()
                    .await
                    .map_err(|_| err(StatusCode::BAD_REQUEST, "Unreadable image field"))?;
                form.image = filename.map(|f| format!("/uploads/{f}"));
            }
            _ => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| err(StatusCode::BAD_REQUEST, "Unreadable form field"))?;
                match name.as_str() {
                    "name" => form.name = Some(text),
                    "price" => {
                        form.price = Some(text.parse().map_err(|_| {
                            err(StatusCode::BAD_REQUEST, "Invalid price")
                        })?)
                    }
                    "description" => form.description = Some(text),
                    "available" => form.available = text.parse().ok(),
                    "categoryId" => form.category_id = Some(text),
                    _ => {}
                }
            }
        }
    }
    Ok(form)
}

async fn create_item(
    State(state): State<SharedState>,
    Path(category_id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let form = read_item_form(multipart).await?;
    let name = form
        .name
        .ok_or_else(|| err(StatusCode::BAD_REQUEST, "Item name is required"))?;

    let mut data = state.data.write().await;
    if !data.categories.iter().any(|c| c.id == category_id) {
        return Err(not_found("Category"));
    }
    let item = MenuItem {
        id: mint_id(),
        name,
        price: form.price.unwrap_or(Decimal::ZERO),
        description: form.description.unwrap_or_default(),
        image: form.image,
        available: form.available.unwrap_or(true),
        category_id: Some(category_id),
    };
    data.items.push(item.clone());
    Ok(Json(json!({ "success": true, "item": item })))
}

async fn update_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let form = read_item_form(multipart).await?;
    let mut data = state.data.write().await;
    let item = data
        .items
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| not_found("Item"))?;
    if let Some(name) = form.name {
        item.name = name;
    }
    if let Some(price) = form.price {
        item.price = price;
    }
    if let Some(description) = form.description {
        item.description = description;
    }
    if let Some(available) = form.available {
        item.available = available;
    }
    if form.image.is_some() {
        item.image = form.image;
    }
    Ok(Json(json!({ "success": true, "item": item.clone() })))
}

async fn delete_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    let mut data = state.data.write().await;
    let before = data.items.len();
    data.items.retain(|i| i.id != id);
    if data.items.len() == before {
        return Err(not_found("Item"));
    }
    // Orders referencing the item now populate to null
    Ok(Json(Ack {
        success: true,
        message: Some("Item deleted".into()),
    }))
}

// ========== Orders ==========

fn order_to_wire(record: &OrderRecord, items: &[MenuItem]) -> Order {
    let lines = record
        .lines
        .iter()
        .map(|line| OrderLine {
            id: Some(line.id.clone()),
            quantity: line.quantity,
            item: if line.populated {
                items
                    .iter()
                    .find(|item| item.id == line.item_id)
                    .map(|item| {
                        ItemRef::Populated(ItemSnapshot {
                            id: Some(item.id.clone()),
                            name: Some(item.name.clone()),
                            price: Some(item.price),
                            image: item.image.clone(),
                        })
                    })
            } else {
                Some(ItemRef::Id(line.item_id.clone()))
            },
        })
        .collect();

    Order {
        id: record.id.clone(),
        status: record.status,
        total_amount: record.total_amount,
        created_at: record.created_at,
        items: lines,
    }
}

async fn list_orders(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Json<OrdersPage> {
    let data = state.data.read().await;
    // The filter is matched against the canonical capitalized form only
    let mut records: Vec<&OrderRecord> = data
        .orders
        .iter()
        .filter(|record| match params.status.as_deref() {
            Some(wanted) => record.status.capitalized() == wanted,
            None => true,
        })
        .collect();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total_orders = records.len() as u64;
    let page = params.page.unwrap_or(1);
    let (records, total_pages) = paginate(&records, page, params.limit.unwrap_or(20));
    let orders = records
        .into_iter()
        .map(|record| order_to_wire(record, &data.items))
        .collect();

    Json(OrdersPage {
        success: true,
        orders,
        current_page: page,
        total_pages,
        total_orders,
    })
}

async fn get_order(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let data = state.data.read().await;
    let record = data
        .orders
        .iter()
        .find(|o| o.id == id)
        .ok_or_else(|| not_found("Order"))?;
    let order = order_to_wire(record, &data.items);
    Ok(Json(json!({ "success": true, "order": order })))
}

#[derive(Debug, Deserialize)]
struct StatusUpdate {
    status: String,
}

async fn update_order_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Ack>, ApiError> {
    // Storage form is capitalized; anything else is rejected outright
    let next = OrderStatus::ALL
        .into_iter()
        .find(|s| s.capitalized() == body.status)
        .ok_or_else(|| err(StatusCode::BAD_REQUEST, format!("Invalid status: {}", body.status)))?;

    let mut data = state.data.write().await;
    let record = data
        .orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| not_found("Order"))?;

    if !record.status.can_transition_to(next) {
        return Err(err(
            StatusCode::BAD_REQUEST,
            format!(
                "Illegal transition from {} to {}",
                record.status.capitalized(),
                next.capitalized()
            ),
        ));
    }

    record.status = next;
    Ok(Json(Ack {
        success: true,
        message: Some("Order status updated".into()),
    }))
}

// ========== Reservations ==========

async fn list_reservations(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Json<ReservationsPage> {
    let data = state.data.read().await;
    let page = params.page.unwrap_or(1);
    let (reservations, total_pages) =
        paginate(&data.reservations, page, params.limit.unwrap_or(20));
    Json(ReservationsPage {
        success: true,
        reservations,
        current_page: page,
        total_pages,
    })
}

async fn get_reservation(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let data = state.data.read().await;
    let reservation = data
        .reservations
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| not_found("Reservation"))?;
    Ok(Json(json!({ "success": true, "reservation": reservation })))
}

async fn update_reservation_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Ack>, ApiError> {
    let next = ReservationStatus::ALL
        .into_iter()
        .find(|s| s.capitalized() == body.status)
        .ok_or_else(|| err(StatusCode::BAD_REQUEST, format!("Invalid status: {}", body.status)))?;

    let mut data = state.data.write().await;
    let reservation = data
        .reservations
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| not_found("Reservation"))?;

    if !reservation.status.can_transition_to(next) {
        return Err(err(
            StatusCode::BAD_REQUEST,
            format!(
                "Illegal transition from {} to {}",
                reservation.status.capitalized(),
                next.capitalized()
            ),
        ));
    }

    reservation.status = next;
    Ok(Json(Ack {
        success: true,
        message: Some("Reservation status updated".into()),
    }))
}

// ========== Reviews ==========

async fn list_reviews(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Json<ReviewsPage> {
    let data = state.data.read().await;
    let page = params.page.unwrap_or(1);
    let (reviews, total_pages) = paginate(&data.reviews, page, params.limit.unwrap_or(20));
    Json(ReviewsPage {
        success: true,
        reviews,
        current_page: page,
        total_pages,
    })
}

async fn delete_review(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    let mut data = state.data.write().await;
    let before = data.reviews.len();
    data.reviews.retain(|r| r.id != id);
    if data.reviews.len() == before {
        return Err(not_found("Review"));
    }
    Ok(Json(Ack {
        success: true,
        message: Some("Review deleted".into()),
    }))
}
