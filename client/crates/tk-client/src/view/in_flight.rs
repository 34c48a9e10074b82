use crate::{ClientError, ClientResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Held while a button-triggered call is running; a second trigger is
/// refused until it drops. Released on drop so a cancelled call cannot
/// leave the control disabled.
#[derive(Debug)]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

impl InFlight {
    #[track_caller]
    pub fn acquire(flag: &Arc<AtomicBool>, operation: &'static str) -> ClientResult<Self> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ClientError::busy(operation));
        }

        Ok(Self { flag: flag.clone() })
    }

    /// Raise `flag` for the guard's lifetime without refusing overlap
    pub fn mark(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self { flag: flag.clone() }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
