//! # User Client
//!
//! The only way request handlers reach the user store. Wraps a `ResourceClient<User>`
//! and turns framework replies into [`UserError`].
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User store actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<UserError>() {
            Ok(user_error) => user_error,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(other) => UserError::StoreUnavailable(other.to_string()),
        }
    }
}

impl UserClient {
    /// Store a new user and return it with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch a live user, or [`UserError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Snapshot of every live user, ascending by id.
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// `Ok(false)` when no live user had `id`.
    pub async fn delete_user(&self, id: UserId) -> Result<bool, UserError> {
        self.delete(id).await
    }

    /// Empty the store and restart ids at 1.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.reset().await.map_err(Self::map_error)
    }
}
