//! # User Store
//!
//! The User resource: its [`ActorEntity`](resource_actor::ActorEntity) implementation,
//! its error type, and a factory for the actor/client pair.
//!
//! ```rust
//! use user_directory::model::UserCreate;
//! use user_directory::user_actor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = user_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     let user = client
//!         .create_user(UserCreate::new("Alice", "alice@example.com"))
//!         .await
//!         .unwrap();
//!     assert_eq!(user.id.0, 1);
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Requests that may queue while the store is busy before callers start waiting.
pub const MAILBOX_SIZE: usize = 64;

/// Creates a new User store actor and its client. The actor does nothing until run.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(MAILBOX_SIZE);
    (actor, UserClient::new(generic_client))
}
