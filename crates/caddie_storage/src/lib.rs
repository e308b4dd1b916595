//! Guild configuration storage for Caddie.
//!
//! Guild settings live as JSON documents in an external document store,
//! keyed by guild id. This crate provides:
//! - **guild_config**: the per-guild configuration document model
//! - **store**: the `DocumentStore` contract and an in-memory
//!   implementation for tests and local runs
//! - **repository**: configuration operations over a store, with lazy
//!   per-guild creation

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod guild_config;
mod repository;
mod store;

pub use guild_config::GuildConfig;
pub use repository::GuildConfigRepository;
pub use store::{DocumentStore, MemoryStore};
