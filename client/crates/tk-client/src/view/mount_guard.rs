use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "is the owning view still mounted" flag. Async work checks it
/// after every await before touching view state.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    pub(crate) fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub(crate) fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}
