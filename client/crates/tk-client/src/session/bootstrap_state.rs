use std::fmt;

/// Startup progress of the session. Starts `Loading`, becomes `Ready` once
/// and stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapState {
    #[default]
    Loading,
    Ready,
}

impl BootstrapState {
    pub fn is_ready(&self) -> bool {
        *self == BootstrapState::Ready
    }
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapState::Loading => f.write_str("loading"),
            BootstrapState::Ready => f.write_str("ready"),
        }
    }
}
