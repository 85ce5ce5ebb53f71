//! # Generic Store Actor
//!
//! This module defines the `ResourceActor`, the task that owns a collection of entities and
//! the counter that numbers them. It is the "Server" side of the actor pair: every read and
//! every write is a message, processed one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a collection of entities.
///
/// **Concurrency Model**:
/// The actor is the only holder of `store` and `next_id`. Requests arrive over one mpsc
/// channel and are handled strictly in receipt order, each to completion before the next
/// is read. This is the exclusive lock of the store: no `Mutex`, no `RwLock`, and no
/// reader ever sees a record mid-update.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the `actor` (server) and `client` (handle).
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client into every request handler.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u64, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Error = NoteError;
///
///     fn from_create_params(id: u64, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.0 })
///     }
///     fn on_update(&mut self, update: NoteUpdate) -> Result<(), NoteError> {
///         self.text = update.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(16);
///     let handle = tokio::spawn(actor.run());
///
///     let note = client.create(NoteCreate("hello".into())).await.unwrap();
///     assert_eq!(note.id, 1);
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
///
/// # Implementation Details
///
/// * **Create**: builds the entity with the *candidate* id `next_id`, runs `on_create`, and
///   only then stores it and advances the counter. A rejected payload leaves the counter alone.
/// * **Get**: clone of the stored entity, or `None`.
/// * **List**: clones of all entities, ascending by id (`BTreeMap` order, which is also
///   creation order since ids only grow).
/// * **Update**: `on_update` on the stored entity, returns the new state.
/// * **Delete**: `on_delete`, then removal. The id is never handed out again.
/// * **Reset**: clears the map and sets `next_id` back to 1.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u64,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // Just the type name ("User" rather than "user_directory::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
            entity_type,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.get(&id)));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.list()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.update(id, update));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(id));
                }
                ResourceRequest::Reset { respond_to } => {
                    self.reset();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");
        let id = T::Id::from(self.next_id);

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };
        if let Err(e) = item.on_create() {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.next_id += 1;
        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    fn get(&self, id: &T::Id) -> Option<T> {
        let item = self.store.get(id).cloned();
        debug!(entity_type = self.entity_type, %id, found = item.is_some(), "Get");
        item
    }

    fn list(&self) -> Vec<T> {
        debug!(entity_type = self.entity_type, size = self.store.len(), "List");
        self.store.values().cloned().collect()
    }

    fn update(&mut self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?update, "Update");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        info!(entity_type, %id, "Updated");
        Ok(item.clone())
    }

    fn delete(&mut self, id: T::Id) -> Result<bool, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, "Delete");
        let Some(item) = self.store.get(&id) else {
            debug!(entity_type, %id, "Nothing to delete");
            return Ok(false);
        };
        if let Err(e) = item.on_delete() {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(true)
    }

    fn reset(&mut self) {
        info!(entity_type = self.entity_type, dropped = self.store.len(), "Reset");
        self.store.clear();
        self.next_id = 1;
    }
}
