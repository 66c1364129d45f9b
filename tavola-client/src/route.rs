//! Client-side route model
//!
//! The console is a single-page app; the hosting shell owns the actual
//! navigation machinery and maps it through this enum. Unauthenticated
//! access to a protected route resolves to the login screen, the root
//! path redirects to login, and anything unmatched renders not-found.

/// Admin console screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Categories,
    CategoryItems { category_id: String },
    Items,
    ItemAdd,
    ItemEdit { id: String },
    Orders,
    OrderDetail { id: String },
    Reservations,
    ReservationDetail { id: String },
    Reviews,
    NotFound,
}

impl Route {
    /// Map a path to its screen
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Login,
            ["admin", "login"] => Route::Login,
            ["admin", "dashboard"] => Route::Dashboard,
            ["admin", "categories"] => Route::Categories,
            ["admin", "categories", category_id, "items"] => Route::CategoryItems {
                category_id: (*category_id).to_string(),
            },
            ["admin", "items"] => Route::Items,
            ["admin", "items", "add"] => Route::ItemAdd,
            ["admin", "items", id, "edit"] => Route::ItemEdit { id: (*id).to_string() },
            ["admin", "orders"] => Route::Orders,
            ["admin", "orders", id] => Route::OrderDetail { id: (*id).to_string() },
            ["admin", "reservations"] => Route::Reservations,
            ["admin", "reservations", id] => Route::ReservationDetail { id: (*id).to_string() },
            ["admin", "reviews"] => Route::Reviews,
            _ => Route::NotFound,
        }
    }

    /// The path this screen lives at
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/admin/login".to_string(),
            Route::Dashboard => "/admin/dashboard".to_string(),
            Route::Categories => "/admin/categories".to_string(),
            Route::CategoryItems { category_id } => {
                format!("/admin/categories/{category_id}/items")
            }
            Route::Items => "/admin/items".to_string(),
            Route::ItemAdd => "/admin/items/add".to_string(),
            Route::ItemEdit { id } => format!("/admin/items/{id}/edit"),
            Route::Orders => "/admin/orders".to_string(),
            Route::OrderDetail { id } => format!("/admin/orders/{id}"),
            Route::Reservations => "/admin/reservations".to_string(),
            Route::ReservationDetail { id } => format!("/admin/reservations/{id}"),
            Route::Reviews => "/admin/reviews".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Whether the screen requires a live session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    /// Resolve a requested route against the session state
    pub fn guard(self, logged_in: bool) -> Route {
        if self.requires_auth() && !logged_in {
            Route::Login
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_login() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse(""), Route::Login);
    }

    #[test]
    fn known_paths_parse_to_screens() {
        assert_eq!(Route::parse("/admin/dashboard"), Route::Dashboard);
        assert_eq!(
            Route::parse("/admin/categories/c1/items"),
            Route::CategoryItems { category_id: "c1".into() }
        );
        assert_eq!(Route::parse("/admin/items/add"), Route::ItemAdd);
        assert_eq!(Route::parse("/admin/items/i9/edit"), Route::ItemEdit { id: "i9".into() });
        assert_eq!(Route::parse("/admin/orders/o3"), Route::OrderDetail { id: "o3".into() });
    }

    #[test]
    fn unmatched_paths_render_not_found() {
        assert_eq!(Route::parse("/admin/unknown"), Route::NotFound);
        assert_eq!(Route::parse("/admin/items/i9/clone"), Route::NotFound);
        assert_eq!(Route::parse("/kitchen"), Route::NotFound);
    }

    #[test]
    fn guard_redirects_unauthenticated_to_login() {
        assert_eq!(Route::Orders.guard(false), Route::Login);
        assert_eq!(Route::Orders.guard(true), Route::Orders);
        assert_eq!(Route::Login.guard(false), Route::Login);
        assert_eq!(Route::NotFound.guard(false), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Dashboard,
            Route::Categories,
            Route::CategoryItems { category_id: "c1".into() },
            Route::ItemAdd,
            Route::ItemEdit { id: "i1".into() },
            Route::OrderDetail { id: "o1".into() },
            Route::Reservations,
            Route::ReservationDetail { id: "r1".into() },
            Route::Reviews,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
