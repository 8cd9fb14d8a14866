//! Full-system integration tests: every slice actor running, wired to the
//! in-memory backend.

use burger_app::clients::OrderAttempt;
use burger_app::gateway::memory::InMemoryBackend;
use burger_app::gateway::Credentials;
use burger_app::lifecycle::BurgerSystem;
use burger_app::model::IngredientKind;
use burger_app::router::Route;
use burger_app::slices::feed::feed_info;
use std::sync::Arc;

async fn logged_in_system() -> BurgerSystem {
    let system = BurgerSystem::new(Arc::new(InMemoryBackend::seeded()));
    system
        .session
        .login(Credentials {
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap()
        .await
        .unwrap();
    system
}

async fn build_full_burger(system: &BurgerSystem) {
    system.catalog.load().await.unwrap().await.unwrap();
    let menu = system.catalog.snapshot().await.unwrap();
    assert!(!menu.data.is_empty());
    for ingredient in menu.data {
        system.constructor.add_ingredient(ingredient).await.unwrap();
    }
}

#[tokio::test]
async fn placing_an_order_clears_the_draft_and_sets_a_receipt() {
    let system = logged_in_system().await;
    build_full_burger(&system).await;

    let before = system.constructor.snapshot().await.unwrap();
    assert!(before.draft.bun.is_some());
    let expected_request = before.draft.request_sequence();

    let attempt = system.constructor.place_order(true).await.unwrap();
    let OrderAttempt::Submitted(settled) = attempt else {
        panic!("expected submission, got {attempt:?}");
    };
    settled.await.unwrap();

    let after = system.constructor.snapshot().await.unwrap();
    let receipt = after.receipt.expect("receipt after success");
    assert_eq!(receipt.number, 1);
    assert_eq!(receipt.ingredients, expected_request);
    assert!(after.draft.bun.is_none());
    assert!(after.draft.fillings.is_empty());
    assert!(!after.submitting);
    assert_eq!(after.error, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unauthenticated_order_is_withheld_without_error_state() {
    let system = BurgerSystem::new(Arc::new(InMemoryBackend::seeded()));
    build_full_burger(&system).await;

    let attempt = system.constructor.place_order(false).await.unwrap();
    assert!(matches!(attempt, OrderAttempt::LoginRequired));

    let state = system.constructor.snapshot().await.unwrap();
    assert!(state.draft.bun.is_some());
    assert!(!state.submitting);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn bunless_order_is_withheld() {
    let system = logged_in_system().await;
    system.catalog.load().await.unwrap().await.unwrap();
    let menu = system.catalog.snapshot().await.unwrap();
    let sauce = menu
        .data
        .into_iter()
        .find(|i| i.kind == IngredientKind::Sauce)
        .unwrap();
    system.constructor.add_ingredient(sauce).await.unwrap();

    let attempt = system.constructor.place_order(true).await.unwrap();
    assert!(matches!(attempt, OrderAttempt::MissingBun));

    let state = system.constructor.snapshot().await.unwrap();
    assert_eq!(state.draft.fillings.len(), 1);
    assert!(!state.submitting);
}

#[tokio::test]
async fn placed_orders_show_up_in_feed_and_history() {
    let system = logged_in_system().await;
    build_full_burger(&system).await;

    let OrderAttempt::Submitted(settled) = system.constructor.place_order(true).await.unwrap()
    else {
        panic!("expected submission");
    };
    settled.await.unwrap();

    system.feed.refresh().await.unwrap().await.unwrap();
    let feed = system.feed.snapshot().await.unwrap();
    assert_eq!(feed.data.total, 1);
    assert_eq!(feed.data.orders.len(), 1);

    system.history.refresh().await.unwrap().await.unwrap();
    let history = system.history.snapshot().await.unwrap();
    assert_eq!(history.data.len(), 1);
    assert_eq!(history.data[0].number, 1);
}

#[tokio::test]
async fn fresh_orders_land_in_the_pending_partition() {
    let system = logged_in_system().await;
    build_full_burger(&system).await;

    let OrderAttempt::Submitted(settled) = system.constructor.place_order(true).await.unwrap()
    else {
        panic!("expected submission");
    };
    settled.await.unwrap();

    system.feed.refresh().await.unwrap().await.unwrap();
    let feed = system.feed.snapshot().await.unwrap();
    let info = feed_info(&feed.data.orders);
    assert_eq!(info.pending, vec![1]);
    assert!(info.ready.is_empty());
}

#[tokio::test]
async fn router_guards_follow_the_session_state() {
    let mut system = BurgerSystem::new(Arc::new(InMemoryBackend::seeded()));
    assert_eq!(system.router.current().route, Route::Constructor);

    // A protected overlay opened over the feed while logged out collapses
    // to the login page.
    system.router.push(Route::Feed);
    system.router.push_overlay(Route::ProfileOrder(1));
    let session = system.session.snapshot().await.unwrap();
    let view = system.router.presentation(session.is_authenticated);
    assert_eq!(view.page, Route::Login);
    assert_eq!(view.overlay, None);

    // After logging in, the same location renders as the overlay it was.
    system
        .session
        .login(Credentials {
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap()
        .await
        .unwrap();
    let session = system.session.snapshot().await.unwrap();
    let view = system.router.presentation(session.is_authenticated);
    assert_eq!(view.page, Route::Feed);
    assert_eq!(view.overlay, Some(Route::ProfileOrder(1)));

    // Dismissal restores the feed page beneath.
    system.router.close_overlay();
    let view = system.router.presentation(session.is_authenticated);
    assert_eq!(view.page, Route::Feed);
    assert_eq!(view.overlay, None);
}

#[tokio::test]
async fn lookup_by_number_is_a_dedicated_request() {
    let system = logged_in_system().await;
    build_full_burger(&system).await;
    let OrderAttempt::Submitted(settled) = system.constructor.place_order(true).await.unwrap()
    else {
        panic!("expected submission");
    };
    settled.await.unwrap();

    // Never fetched the feed list; the lookup still works.
    system.feed.lookup(1).await.unwrap().await.unwrap();
    let lookup = system.feed.lookup_snapshot().await.unwrap();
    assert_eq!(lookup.data.as_ref().map(|o| o.number), Some(1));
    assert_eq!(lookup.error, None);

    // The list resource was never perturbed.
    let feed = system.feed.snapshot().await.unwrap();
    assert!(!feed.loading);
    assert!(feed.data.orders.is_empty());
}

#[tokio::test]
async fn lookup_miss_settles_as_a_rejection() {
    let system = BurgerSystem::new(Arc::new(InMemoryBackend::seeded()));

    system.feed.lookup(404).await.unwrap().await.unwrap();
    let lookup = system.feed.lookup_snapshot().await.unwrap();
    assert_eq!(lookup.error.as_deref(), Some("Order not found"));
    assert_eq!(lookup.data, None);
}

#[tokio::test]
async fn failed_login_records_the_error() {
    let system = BurgerSystem::new(Arc::new(InMemoryBackend::seeded()));
    system
        .session
        .login(Credentials {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap()
        .await
        .unwrap();

    let session = system.session.snapshot().await.unwrap();
    assert!(!session.is_authenticated);
    assert_eq!(session.error.as_deref(), Some("Invalid credentials"));
}
