//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored by a [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin down the id, the create payload and the update payload, so a
//! `UserCreate` can never be sent to a store of some other resource. Hooks are plain
//! synchronous functions: they run inside the actor while it holds exclusive access to
//! the collection, and must not block or wait on anything else.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Provided Methods (Hooks)
/// - [`ActorEntity::on_create`]
/// - [`ActorEntity::on_delete`]
///
/// Both default to `Ok(())`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the store's `u64` counter and kept in id order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One enum per resource rather than one per operation; clients match on a
    /// single type and recover it from [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the candidate id and the payload.
    ///
    /// Returning `Err` rejects the create. The candidate id is not consumed in that case.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity becomes visible.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update in place.
    ///
    /// On `Err` the implementation must leave `self` unchanged.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
