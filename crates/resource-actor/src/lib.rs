//! # Resource Actor
//!
//! A single-owner, in-memory store for one resource type, driven by message passing.
//!
//! ## Why a Store Actor?
//!
//! A directory service has many request handlers running in parallel, but only one
//! collection of records. Instead of sharing the collection behind a lock that every
//! handler must remember to take, the collection is **owned** by one Tokio task:
//!
//! - The [`ResourceActor`] owns the id-ordered map and the next-id counter.
//! - Handlers hold a cheap, cloneable [`ResourceClient`] and send it requests.
//! - The actor answers one [`ResourceRequest`] at a time, to completion.
//!
//! The mailbox is the lock. Operations are totally ordered by the order in which the
//! actor receives them, there is no reader/writer split, and a request never observes
//! a record half-way through a mutation. Every entity hook is synchronous, so nothing
//! suspends while the store is mid-operation.
//!
//! ## Lifecycle
//!
//! | Step | How |
//! |------|-----|
//! | Initialize | [`ResourceActor::new`] then `tokio::spawn(actor.run())` |
//! | Re-initialize | [`ResourceClient::reset`] empties the map and rewinds the counter to 1 |
//! | Shutdown | Drop every client; the actor drains its mailbox and returns |
//!
//! After shutdown any surviving client clone fails with [`FrameworkError::ActorClosed`]
//! instead of touching freed state.
//!
//! ## Identifiers
//!
//! Ids are issued from a `u64` counter starting at 1. An id is consumed only when a
//! record is actually stored, so a rejected create never skips a number, and ids are
//! never reused after delete.
//!
//! ## Module Tour
//!
//! - [`entity`] - the [`ActorEntity`] contract a resource implements
//! - [`message`] - the request protocol between client and actor
//! - [`actor`] - the store task itself
//! - [`client`] / [`client_trait`] - the handle and the wrapper trait for domain clients
//! - [`error`] - [`FrameworkError`]
//! - [`mock`] - a scripted [`mock::MockClient`] for tests that must not spawn a real store
//! - [`tracing`] - subscriber bootstrap shared by binaries

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
