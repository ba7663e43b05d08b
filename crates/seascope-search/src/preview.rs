//! Local preview references for selected images.
//!
//! A [`PreviewHandle`] stands in for a browser object URL: it is registered
//! when an image is selected and released when the handle is dropped, so a
//! replaced, removed or torn-down selection never leaks its preview.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use uuid::Uuid;

use seascope_common::ImageFile;

const PREVIEW_SCHEME: &str = "blob:seascope";

/// Tracks which preview references are currently alive.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    live: Arc<Mutex<HashSet<Uuid>>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a preview for `file`.
    pub fn create(&self, file: &ImageFile) -> PreviewHandle {
        let id = Uuid::new_v4();
        self.lock().insert(id);
        debug!(%id, file = file.name(), "preview created");
        PreviewHandle {
            id,
            url: format!("{PREVIEW_SCHEME}/{id}"),
            live: Arc::clone(&self.live),
        }
    }

    /// Number of previews not yet released.
    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    pub fn is_live(&self, handle: &PreviewHandle) -> bool {
        self.lock().contains(&handle.id)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<Uuid>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A live preview reference. Dropping it releases the reference.
#[derive(Debug)]
pub struct PreviewHandle {
    id: Uuid,
    url: String,
    live: Arc<Mutex<HashSet<Uuid>>>,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        let mut live = self.live.lock().unwrap_or_else(PoisonError::into_inner);
        if live.remove(&self.id) {
            debug!(id = %self.id, "preview released");
        }
    }
}
