// tavola-client/examples/admin_console.rs
// Walk the admin surface against a live backend (real or mock)

use tavola_client::view::{OrderDetailView, OverviewView, order_summaries};
use tavola_client::{AdminSession, ClientConfig, OrderFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password>", args[0]);
        println!("  Backend base URL comes from TAVOLA_BASE_URL (default http://localhost:3000)");
        return Ok(());
    }

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "connecting");

    let session = AdminSession::connect(&config).with_unauthorized_hook(std::sync::Arc::new(|| {
        tracing::warn!("session expired, back to the login screen");
    }));

    let route = session.login(&args[1], &args[2]).await?;
    tracing::info!(?route, "logged in");

    let overview = OverviewView::from(session.api().overview().await?);
    tracing::info!(
        orders = overview.total_orders,
        revenue = %overview.total_revenue,
        reservations = overview.total_reservations,
        "dashboard"
    );
    for bucket in &overview.orders_by_status {
        tracing::info!(status = %bucket.status, count = bucket.count, "orders by status");
    }

    let page = session.api().orders(1, 20, OrderFilter::All).await?;
    for summary in order_summaries(&page) {
        tracing::info!(
            id = %summary.id,
            status = %summary.status,
            total = %summary.total_amount,
            items = summary.items_count,
            "order"
        );
    }

    if let Some(first) = page.orders.first() {
        let envelope = session.api().order(&first.id).await?;
        let detail = OrderDetailView::from(&envelope.order);
        for line in &detail.items {
            tracing::info!(name = %line.name, qty = line.quantity, price = %line.price, "line");
        }
        tracing::info!(options = ?detail.status_options(), "offered transitions");
    }

    session.logout();
    Ok(())
}
