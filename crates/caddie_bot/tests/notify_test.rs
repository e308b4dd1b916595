//! Integration tests for the completed-event notification poller.
//!
//! Every fixture event ended in the past, so both count as completed;
//! what varies per test is which guilds subscribe and track whom.

mod common;

use caddie_bot::{Notifier, NotifierConfig, NotifierMessage};
use caddie_storage::{GuildConfigRepository, MemoryStore};
use common::{FailingSink, FixtureProvider, RecordingSink};
use std::sync::Arc;
use tokio::sync::mpsc;

const TEST_GUILD_ID: i64 = 12345;
const TEST_CHANNEL_ID: i64 = 777;
const TEST_PLAYER_NAME: &str = "Rory McIlroy";

fn notifier_over<C: caddie_bot::ChatSink>(
    store: Arc<MemoryStore>,
    sink: C,
) -> Notifier<FixtureProvider, Arc<MemoryStore>, C> {
    let (_tx, rx) = mpsc::channel(8);
    Notifier::new(
        NotifierConfig::default(),
        FixtureProvider,
        GuildConfigRepository::new(store),
        sink,
        vec![TEST_GUILD_ID],
        rx,
    )
}

async fn subscribe(store: &Arc<MemoryStore>, players: &[&str]) {
    let repository = GuildConfigRepository::new(store.clone());
    for player in players {
        repository
            .add_tracked_player(TEST_GUILD_ID, player)
            .await
            .expect("seed tracked player");
    }
    repository
        .set_notifications(TEST_GUILD_ID, true, Some(TEST_CHANNEL_ID))
        .await
        .expect("seed subscription");
}

#[tokio::test]
async fn test_sweep_notifies_subscribed_guild() {
    let store = Arc::new(MemoryStore::new());
    subscribe(&store, &[TEST_PLAYER_NAME]).await;

    let sink = Arc::new(RecordingSink::new());
    let notifier = notifier_over(store, sink.clone());

    let sent = notifier.check_completed().await.expect("sweep succeeds");
    assert_eq!(sent, 1);

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(*messages[0].channel_id(), TEST_CHANNEL_ID);
    assert_eq!(messages[0].embeds().len(), 1);
    assert_eq!(messages[0].embeds()[0].title(), "'The Open' has finished!");
    assert_eq!(messages[0].embeds()[0].fields().len(), 5);
}

#[tokio::test]
async fn test_second_sweep_sends_nothing() {
    let store = Arc::new(MemoryStore::new());
    subscribe(&store, &[TEST_PLAYER_NAME]).await;

    let sink = Arc::new(RecordingSink::new());
    let notifier = notifier_over(store, sink.clone());

    assert_eq!(notifier.check_completed().await.expect("first sweep"), 1);
    assert_eq!(notifier.check_completed().await.expect("second sweep"), 0);
    assert_eq!(sink.messages().len(), 1);
}

#[tokio::test]
async fn test_sweep_covers_every_tracked_event() {
    let store = Arc::new(MemoryStore::new());
    subscribe(&store, &[TEST_PLAYER_NAME, "Akshay Bhatia"]).await;

    let sink = Arc::new(RecordingSink::new());
    let notifier = notifier_over(store, sink.clone());

    let sent = notifier.check_completed().await.expect("sweep succeeds");
    assert_eq!(sent, 2);
    assert_eq!(sink.messages().len(), 2);
}

#[tokio::test]
async fn test_unsubscribed_guild_gets_nothing() {
    let store = Arc::new(MemoryStore::new());
    // Tracked players but notifications never enabled.
    let repository = GuildConfigRepository::new(store.clone());
    repository
        .add_tracked_player(TEST_GUILD_ID, TEST_PLAYER_NAME)
        .await
        .expect("seed tracked player");

    let sink = Arc::new(RecordingSink::new());
    let notifier = notifier_over(store, sink.clone());

    assert_eq!(notifier.check_completed().await.expect("sweep"), 0);
    assert!(sink.messages().is_empty());
}

#[tokio::test]
async fn test_guild_without_config_gets_nothing() {
    let sink = Arc::new(RecordingSink::new());
    let notifier = notifier_over(Arc::new(MemoryStore::new()), sink.clone());

    assert_eq!(notifier.check_completed().await.expect("sweep"), 0);
    assert!(sink.messages().is_empty());
}

#[tokio::test]
async fn test_failed_send_is_retried_next_sweep() {
    let store = Arc::new(MemoryStore::new());
    subscribe(&store, &[TEST_PLAYER_NAME]).await;

    // The send fails, so nothing is recorded and the sweep reports zero.
    let failing = notifier_over(store.clone(), FailingSink);
    assert_eq!(failing.check_completed().await.expect("sweep survives"), 0);

    // A later sweep with a healthy sink delivers the notification.
    let sink = Arc::new(RecordingSink::new());
    let healthy = notifier_over(store, sink.clone());
    assert_eq!(healthy.check_completed().await.expect("sweep"), 1);
    assert_eq!(sink.messages().len(), 1);
}

#[tokio::test]
async fn test_run_loop_shuts_down() {
    let store = Arc::new(MemoryStore::new());
    let sink = Arc::new(RecordingSink::new());

    let (tx, rx) = mpsc::channel(8);
    let notifier = Notifier::new(
        NotifierConfig::default(),
        FixtureProvider,
        GuildConfigRepository::new(store),
        sink,
        vec![TEST_GUILD_ID],
        rx,
    );

    let handle = tokio::spawn(notifier.run());
    tx.send(NotifierMessage::Shutdown)
        .await
        .expect("poller is listening");
    handle.await.expect("poller exits cleanly");
}
