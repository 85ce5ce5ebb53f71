//! # Generic Messages
//!
//! The request protocol between [`ResourceClient`](crate::ResourceClient) and
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// One store operation, answered through its `respond_to` channel.
///
/// - **Create**: builds the entity from [`ActorEntity::Create`] and returns the stored record.
/// - **Get**: `None` when no live record has the id.
/// - **List**: a snapshot of every live record, in ascending id order.
/// - **Update**: applies [`ActorEntity::Update`]; `NotFound` when the id is unknown.
/// - **Delete**: `true` if a record was removed, `false` if there was none.
/// - **Reset**: empties the store and rewinds the id counter to 1.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Reset {
        respond_to: Response<()>,
    },
}
