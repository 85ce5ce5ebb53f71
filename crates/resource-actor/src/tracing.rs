//! # Observability
//!
//! One-call subscriber setup for binaries built on this crate.
//!
//! The store actor emits structured events with an `entity_type` field (`Created`,
//! `Updated`, `Deleted`, `Reset`, `Shutdown`, ...), so module paths are hidden and the
//! compact formatter is used.
//!
//! ```bash
//! RUST_LOG=info  user-directory   # lifecycle + mutations
//! RUST_LOG=debug user-directory   # every Get/List with payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`; without it, `info` is used. Calling this twice is
/// harmless: the second install attempt is ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where an event came from
        .compact()
        .try_init();
}
