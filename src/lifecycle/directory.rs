use crate::clients::UserClient;
use crate::model::{User, UserCreate, DEFAULT_USERS};
use crate::user_actor::{self, UserError};
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

/// How long [`UserDirectory::shutdown`] waits for the store to drain before aborting it.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Owner of the running user store.
///
/// ```ignore
/// let directory = UserDirectory::new();
/// directory.seed_defaults().await?;
///
/// let users = directory.client(); // hand clones to request handlers
/// let alice = users.get_user(UserId(1)).await?;
///
/// directory.shutdown().await?;
/// ```
pub struct UserDirectory {
    /// Client for the store. Clone it for every task that needs access.
    pub user_client: UserClient,

    /// Store task handle (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl UserDirectory {
    /// Spawns an empty store whose first id will be 1.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (user_actor, user_client) = user_actor::new();
        let handle = tokio::spawn(user_actor.run());
        info!("User directory initialized");

        Self {
            user_client,
            handle,
        }
    }

    /// A new handle to the store.
    pub fn client(&self) -> UserClient {
        self.user_client.clone()
    }

    /// Creates the sample users (Alice, Bob, Charlie) in that order.
    pub async fn seed_defaults(&self) -> Result<Vec<User>, UserError> {
        let mut seeded = Vec::with_capacity(DEFAULT_USERS.len());
        for (name, email) in DEFAULT_USERS {
            seeded.push(
                self.user_client
                    .create_user(UserCreate::new(name, email))
                    .await?,
            );
        }
        info!(count = seeded.len(), "Seeded default users");
        Ok(seeded)
    }

    /// Empties the store and rewinds the id counter to 1.
    pub async fn reset(&self) -> Result<(), UserError> {
        self.user_client.reset().await
    }

    /// Stops the store and waits for its task to finish.
    ///
    /// Returns `Err` only if the store task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down user directory...");

        // The store exits once the last sender is gone.
        drop(self.user_client);

        let mut handle = self.handle;
        match tokio::time::timeout(SHUTDOWN_GRACE, &mut handle).await {
            Ok(joined) => joined?,
            Err(_) => {
                warn!(grace = ?SHUTDOWN_GRACE, "Store still referenced, aborting");
                handle.abort();
                if let Err(e) = handle.await {
                    if !e.is_cancelled() {
                        return Err(e);
                    }
                }
            }
        }

        info!("User directory shutdown complete.");
        Ok(())
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
