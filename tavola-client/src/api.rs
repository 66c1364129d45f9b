//! Domain API facade
//!
//! One operation per backend capability. Paths, methods and body shapes
//! mirror the backend contract; status values are capitalized at this
//! boundary and responses come back as the wire types from `shared`.

use crate::{ClientResult, http::HttpClient};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{CategoryCreate, CategoryUpdate, ItemUpload, Overview, OverviewResponse};
use shared::response::{
    Ack, CategoriesResponse, ItemsPage, OrderEnvelope, OrdersPage, ReservationResponse,
    ReservationsPage, ReviewsPage,
};
use shared::status::{OrderStatus, ReservationStatus};

/// Status filter for the orders listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    /// No filter; the sentinel is omitted from the query entirely
    #[default]
    All,
    Only(OrderStatus),
}

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
}

fn list_query(page: u32, limit: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("limit", limit.to_string())]
}

fn orders_query(page: u32, limit: u32, filter: OrderFilter) -> Vec<(&'static str, String)> {
    let mut query = list_query(page, limit);
    if let OrderFilter::Only(status) = filter {
        query.push(("status", status.capitalized().to_string()));
    }
    query
}

fn item_form(upload: ItemUpload) -> Form {
    let mut form = Form::new()
        .text("name", upload.name)
        .text("price", upload.price.to_string())
        .text("description", upload.description)
        .text("available", upload.available.to_string());
    if let Some(category_id) = upload.category_id {
        form = form.text("categoryId", category_id);
    }
    if let Some(image) = upload.image {
        form = form.part("image", Part::bytes(image.bytes).file_name(image.filename));
    }
    form
}

/// Typed facade over the admin REST surface
#[derive(Debug, Clone)]
pub struct AdminApi {
    http: HttpClient,
}

impl AdminApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========== Auth ==========

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post("/admin/login", &request).await
    }

    // ========== Analytics ==========

    /// Dashboard overview. The backend serves either a `{data: ...}`
    /// envelope or the flat object; both normalize here.
    pub async fn overview(&self) -> ClientResult<Overview> {
        let response: OverviewResponse = self.http.get("/admin/analytics/overview", &[]).await?;
        Ok(response.into_inner())
    }

    // ========== Menu categories ==========

    pub async fn categories(&self) -> ClientResult<CategoriesResponse> {
        self.http.get("/admin/menu/categories", &[]).await
    }

    pub async fn create_category(&self, payload: &CategoryCreate) -> ClientResult<Ack> {
        self.http.post("/admin/menu/category", payload).await
    }

    pub async fn update_category(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<Ack> {
        self.http.put(&format!("/admin/menu/category/{id}"), payload).await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<Ack> {
        self.http.delete(&format!("/admin/menu/category/{id}")).await
    }

    // ========== Menu items ==========

    pub async fn category_items(
        &self,
        category_id: &str,
        page: u32,
        limit: u32,
    ) -> ClientResult<ItemsPage> {
        self.http
            .get(
                &format!("/admin/menu/categories/{category_id}/items"),
                &list_query(page, limit),
            )
            .await
    }

    pub async fn create_item(&self, category_id: &str, upload: ItemUpload) -> ClientResult<Ack> {
        self.http
            .post_multipart(
                &format!("/admin/menu/categories/{category_id}/items"),
                item_form(upload),
            )
            .await
    }

    pub async fn update_item(&self, id: &str, upload: ItemUpload) -> ClientResult<Ack> {
        self.http
            .put_multipart(&format!("/admin/menu/items/{id}"), item_form(upload))
            .await
    }

    pub async fn delete_item(&self, id: &str) -> ClientResult<Ack> {
        self.http.delete(&format!("/admin/menu/items/{id}")).await
    }

    // ========== Orders ==========

    pub async fn orders(&self, page: u32, limit: u32, filter: OrderFilter) -> ClientResult<OrdersPage> {
        self.http
            .get("/admin/orders", &orders_query(page, limit, filter))
            .await
    }

    pub async fn order(&self, id: &str) -> ClientResult<OrderEnvelope> {
        self.http.get(&format!("/admin/orders/{id}"), &[]).await
    }

    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Ack> {
        let body = StatusBody {
            status: status.capitalized(),
        };
        self.http.put(&format!("/admin/orders/{id}/status"), &body).await
    }

    // ========== Reservations ==========

    pub async fn reservations(&self, page: u32, limit: u32) -> ClientResult<ReservationsPage> {
        self.http.get("/admin/reservations", &list_query(page, limit)).await
    }

    pub async fn reservation(&self, id: &str) -> ClientResult<ReservationResponse> {
        self.http.get(&format!("/admin/reservation/{id}"), &[]).await
    }

    pub async fn update_reservation_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> ClientResult<Ack> {
        let body = StatusBody {
            status: status.capitalized(),
        };
        self.http.put(&format!("/admin/reservation/{id}/status"), &body).await
    }

    // ========== Reviews ==========

    pub async fn reviews(&self, page: u32, limit: u32) -> ClientResult<ReviewsPage> {
        self.http.get("/admin/reviews", &list_query(page, limit)).await
    }

    pub async fn delete_review(&self, id: &str) -> ClientResult<Ack> {
        self.http.delete(&format!("/admin/reviews/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_query_capitalizes_filter() {
        let query = orders_query(2, 20, OrderFilter::Only(OrderStatus::Completed));
        assert_eq!(
            query,
            vec![
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
                ("status", "Completed".to_string()),
            ]
        );
    }

    #[test]
    fn all_sentinel_is_omitted_from_query() {
        let query = orders_query(1, 20, OrderFilter::All);
        assert_eq!(query, vec![("page", "1".to_string()), ("limit", "20".to_string())]);
    }
}
