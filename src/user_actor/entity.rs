//! [`ActorEntity`] implementation for the [`User`] record.
//!
//! Validation lives here, so it runs inside the store actor: a create that fails it
//! never reaches the map and never consumes an id.

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use resource_actor::ActorEntity;

fn required(field: &str, value: Option<String>) -> Result<String, UserError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(UserError::InvalidArgument(format!("{field} is required"))),
    }
}

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Error = UserError;

    /// Builds a User, rejecting an absent or empty `name` or `email`.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: required("name", params.name)?,
            email: required("email", params.email)?,
        })
    }

    /// Overwrites only the fields that are present.
    ///
    /// An empty string is written as given; only `create` insists on non-empty values.
    fn on_update(&mut self, update: UserUpdate) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}
