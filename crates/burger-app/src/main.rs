//! Demo run of the burger store against the in-memory backend: load the
//! catalog, log in, build a burger, place the order, then read the feed.

use burger_app::clients::OrderAttempt;
use burger_app::gateway::memory::InMemoryBackend;
use burger_app::gateway::Credentials;
use burger_app::lifecycle::{setup_tracing, BurgerSystem};
use burger_app::router::Route;
use burger_app::slices::feed::feed_info;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    info!("Starting burger store");

    let mut system = BurgerSystem::new(Arc::new(InMemoryBackend::seeded()));

    // Startup: catalog load and silent session restore.
    let catalog_settled = system.catalog.load().await.map_err(|e| e.to_string())?;
    let session_settled = system.session.fetch_user().await.map_err(|e| e.to_string())?;
    catalog_settled.await.map_err(|e| e.to_string())?;
    session_settled.await.map_err(|e| e.to_string())?;

    let menu = system.catalog.snapshot().await.map_err(|e| e.to_string())?;
    info!(ingredients = menu.data.len(), "Catalog loaded");

    // Log in.
    system
        .session
        .login(Credentials {
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?
        .await
        .map_err(|e| e.to_string())?;
    let session = system.session.snapshot().await.map_err(|e| e.to_string())?;
    info!(user = ?session.user.as_ref().map(|u| &u.name), "Logged in");

    // Build a burger: the bun plus every non-bun ingredient once.
    for ingredient in menu.data.iter().cloned() {
        system
            .constructor
            .add_ingredient(ingredient)
            .await
            .map_err(|e| e.to_string())?;
    }
    let draft = system
        .constructor
        .snapshot()
        .await
        .map_err(|e| e.to_string())?
        .draft;
    info!(
        price = draft.price(),
        fillings = draft.fillings.len(),
        has_bun = draft.bun.is_some(),
        "Draft assembled"
    );

    // Place the order.
    match system
        .constructor
        .place_order(session.is_authenticated)
        .await
        .map_err(|e| e.to_string())?
    {
        OrderAttempt::Submitted(settled) => {
            settled.await.map_err(|e| e.to_string())?;
            let state = system
                .constructor
                .snapshot()
                .await
                .map_err(|e| e.to_string())?;
            match state.receipt {
                Some(order) => info!(number = order.number, "Order placed"),
                None => error!(error = ?state.error, "Order failed"),
            }
            system.constructor.reset().await.map_err(|e| e.to_string())?;
        }
        OrderAttempt::LoginRequired => error!("Order withheld: login required"),
        OrderAttempt::MissingBun => error!("Order withheld: no bun selected"),
    }

    // Read the public feed.
    system
        .feed
        .refresh()
        .await
        .map_err(|e| e.to_string())?
        .await
        .map_err(|e| e.to_string())?;
    let feed = system.feed.snapshot().await.map_err(|e| e.to_string())?;
    let info = feed_info(&feed.data.orders);
    info!(
        total = feed.data.total,
        today = feed.data.total_today,
        ready = ?info.ready,
        pending = ?info.pending,
        "Feed"
    );

    // Navigate to the feed and open the newest order as an overlay.
    system.router.push(Route::Feed);
    if let Some(order) = feed.data.orders.first() {
        system.router.push_overlay(Route::FeedOrder(order.number));
    }
    let view = system.router.presentation(session.is_authenticated);
    info!(
        page = %view.page.path(),
        overlay = ?view.overlay.as_ref().map(Route::path),
        "Presentation"
    );
    system.router.close_overlay();

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
