//! Tokio Runtime Bridge
//!
//! The browser's owner runs on a plain thread (the REPL loop). Fetches are
//! async and run on a shared tokio runtime; results travel back over the
//! service event channel.
//!
//! ## Pattern
//!
//! ```text
//! Browser operation
//!       │
//!       ▼
//! spawn_named_in_tokio(fetch)
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! ServiceEvent sent back to the owner
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task with a name (for debugging)
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::trace!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::trace!("Tokio task completed: {}", name);
    });
}
