//! Shared helpers for bot integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use caddie_bot::{ChatSink, OutboundMessage};
use caddie_error::{CaddieResult, HttpError, StorageError, StorageErrorKind};
use caddie_scoreboard::{Scoreboard, ScoreboardProvider};
use caddie_storage::DocumentStore;
use serde_json::Value as JsonValue;
use std::sync::Mutex;

/// Scoreboard document shared with the scoreboard crate's tests.
pub const FIXTURE: &str = include_str!("../data/scoreboard_response.json");

/// Scoreboard provider backed by the fixture document.
pub struct FixtureProvider;

#[async_trait::async_trait]
impl ScoreboardProvider for FixtureProvider {
    async fn scoreboard(&self) -> CaddieResult<Scoreboard> {
        Scoreboard::parse(FIXTURE)
    }
}

/// Chat sink that records every outbound message.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<OutboundMessage>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatSink for RecordingSink {
    async fn send(&self, message: OutboundMessage) -> CaddieResult<()> {
        self.messages.lock().unwrap().push(message);
        Ok(())
    }
}

/// Chat sink whose sends always fail.
pub struct FailingSink;

#[async_trait::async_trait]
impl ChatSink for FailingSink {
    async fn send(&self, _message: OutboundMessage) -> CaddieResult<()> {
        Err(HttpError::new("chat platform offline").into())
    }
}

/// Document store whose writes always fail.
pub struct FailingStore;

#[async_trait::async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, _guild_id: i64) -> CaddieResult<Option<JsonValue>> {
        Ok(None)
    }

    async fn set(&self, _guild_id: i64, _document: JsonValue) -> CaddieResult<()> {
        Err(StorageError::new(StorageErrorKind::DocumentWrite("backend offline".to_string())).into())
    }
}
