//! # Store Lifecycle
//!
//! Starting, seeding, re-initializing and stopping the user store.
//!
//! The [`UserDirectory`] is the one place that owns the store task. Everything else
//! holds a [`UserClient`](crate::clients::UserClient) clone.
//!
//! | Operation | Method |
//! |-----------|--------|
//! | initialize | [`UserDirectory::new`] (empty store, next id 1) |
//! | seed defaults | [`UserDirectory::seed_defaults`] |
//! | re-initialize (tests) | [`UserDirectory::reset`] |
//! | shutdown | [`UserDirectory::shutdown`] |
//! | wait for SIGINT/SIGTERM | [`shutdown_signal`] |
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the directory's client** - closes its sender.
//! 2. **Store detects closure** - once every clone is gone, `recv()` returns `None`.
//! 3. **Store logs final size and exits**.
//! 4. **Join** - the task handle is awaited, bounded by [`SHUTDOWN_GRACE`]; a store still
//!    referenced after that is aborted.
//!
//! Because `shutdown` consumes the directory, no operation can be issued through it
//! afterwards. A stray client clone gets `UserError::StoreUnavailable`.

pub mod directory;
pub mod signal;

pub use directory::*;
pub use signal::shutdown_signal;
