use std::sync::{Mutex, MutexGuard};

use log::info;

/// Where the application is currently "displayed"
pub trait Navigator: Send + Sync {
    /// Path of the view currently showing
    fn current_path(&self) -> String;

    /// In-app route change (view mount)
    fn navigate(&self, path: &str);

    /// Full navigation that reloads the application at `path`
    fn redirect(&self, path: &str);
}

/// Navigator that only tracks location; used by the CLI and in tests
#[derive(Debug)]
pub struct InMemoryNavigator {
    state: Mutex<NavigatorState>,
}

#[derive(Debug)]
struct NavigatorState {
    current: String,
    redirects: Vec<String>,
}

impl InMemoryNavigator {
    pub fn new(initial_path: &str) -> Self {
        Self {
            state: Mutex::new(NavigatorState {
                current: initial_path.to_string(),
                redirects: Vec::new(),
            }),
        }
    }

    /// Targets of every full redirect so far, oldest first
    pub fn redirects(&self) -> Vec<String> {
        self.lock().redirects.clone()
    }

    fn lock(&self) -> MutexGuard<'_, NavigatorState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for InMemoryNavigator {
    fn current_path(&self) -> String {
        self.lock().current.clone()
    }

    fn navigate(&self, path: &str) {
        self.lock().current = path.to_string();
    }

    fn redirect(&self, path: &str) {
        info!("Redirecting to {path}");
        let mut state = self.lock();
        state.current = path.to_string();
        state.redirects.push(path.to_string());
    }
}
