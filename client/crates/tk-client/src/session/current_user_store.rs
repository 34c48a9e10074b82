use tk_core::CurrentUser;

use std::sync::Arc;

use tokio::sync::watch;

/// Process-wide "who is logged in".
///
/// Single writer (the session bootstrapper and the auth-failure hook, both
/// inside this crate), any number of readers. Readers either poll `get()` or
/// hold a `subscribe()` receiver and await `changed()`.
#[derive(Clone, Debug)]
pub struct CurrentUserStore {
    tx: Arc<watch::Sender<Option<CurrentUser>>>,
}

impl CurrentUserStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> Option<CurrentUser> {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Receiver notified on every identity change
    pub fn subscribe(&self) -> watch::Receiver<Option<CurrentUser>> {
        self.tx.subscribe()
    }

    pub(crate) fn set(&self, user: CurrentUser) {
        self.tx.send_if_modified(|current| {
            if current.as_ref() == Some(&user) {
                return false;
            }
            *current = Some(user);
            true
        });
    }

    /// Returns whether a user was present
    pub(crate) fn clear(&self) -> bool {
        self.tx.send_if_modified(|current| current.take().is_some())
    }
}

impl Default for CurrentUserStore {
    fn default() -> Self {
        Self::new()
    }
}
