//! Pure data structures (DTOs). [`User`] implements [`ActorEntity`](resource_actor::ActorEntity)
//! in [`crate::user_actor::entity`].

pub mod user;

pub use user::*;
