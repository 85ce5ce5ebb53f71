//! # User Directory
//!
//! > **A small in-memory user directory served over HTTP.**
//!
//! Records are `{id, name, email}`. Ids are positive integers issued from 1 upward,
//! never reused, and a rejected create never consumes one. The server starts with three
//! sample users (Alice, Bob, Charlie) and forgets everything when it stops.
//!
//! ## 🏗️ Design
//!
//! ### The store is an actor
//! All records live inside one [`ResourceActor`](resource_actor::ResourceActor) task.
//! Request handlers never touch the map directly; they send messages through a cloned
//! [`UserClient`](clients::UserClient). The actor handles one message at a time, so every
//! operation is atomic and operations are totally ordered, with no locks in the handlers.
//!
//! ### Typed errors end to end
//! The store reports [`UserError`](user_actor::UserError); the HTTP layer converts it into
//! [`ApiError`](http::response::ApiError), which renders the `{"error": ...}` envelope and
//! picks the status code.
//!
//! ### Observability
//! `tracing` is used everywhere. The store logs every mutation with the entity type and
//! id; the HTTP layer logs every incoming request. See
//! [`resource_actor::tracing`] for the subscriber setup.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`User`](model::User), [`UserId`](model::UserId) and the create/update payloads.
//!
//! ### 2. The Store ([`user_actor`], [`clients`])
//! The `ActorEntity` implementation with its validation rules, and the typed client.
//!
//! ### 3. The Owner ([`lifecycle`])
//! [`UserDirectory`](lifecycle::UserDirectory) spawns, seeds, resets and shuts down the store.
//!
//! ### 4. The Surface ([`http`])
//! Routes, CORS, JSON error envelopes and the OpenAPI document.
//!
//! ### 5. Startup ([`config`], [`env`])
//! `PORT` and `HOST` read through a mockable environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Listen on 0.0.0.0:5000 with info logs
//! cargo run
//!
//! PORT=8080 RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod clients;
pub mod config;
pub mod env;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
