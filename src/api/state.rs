use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::TaskStore;

// =============================================================================
// AppState
// =============================================================================

/// Shared handler dependencies.
///
/// The store is a trait object so the binary can use the JSON file while
/// tests substitute [`crate::infrastructure::InMemoryTaskStore`].
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,

    /// Held across the read-modify-write of task creation so that
    /// overlapping submissions in this process get distinct ids.
    pub add_lock: Arc<Mutex<()>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: impl TaskStore + 'static) -> Self {
        Self::from_arc(Arc::new(store))
    }

    #[must_use]
    pub fn from_arc(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            add_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("AppState").finish_non_exhaustive()
    }
}
