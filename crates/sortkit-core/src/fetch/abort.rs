//! Shared cancellation flag for in-flight requests.

use super::{FetchError, FetchResult};
use std::cell::Cell;
use std::rc::Rc;

/// Read side of a cancellation flag. Cheap to clone; every clone observes
/// the same controller.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    aborted: Rc<Cell<bool>>,
}

impl AbortSignal {
    /// Check if the owning controller has aborted.
    pub fn is_aborted(&self) -> bool {
        self.aborted.get()
    }

    /// `Err(FetchError::Aborted)` once aborted.
    pub fn check(&self) -> FetchResult<()> {
        if self.is_aborted() {
            Err(FetchError::Aborted)
        } else {
            Ok(())
        }
    }
}

/// Owner of a cancellation flag.
#[derive(Debug, Default)]
pub struct AbortController {
    signal: AbortSignal,
}

impl AbortController {
    /// Create a controller that has not aborted.
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal to hand to requests.
    pub fn signal(&self) -> AbortSignal {
        self.signal.clone()
    }

    /// Abort every request holding this controller's signal.
    /// Returns false if it had already aborted.
    pub fn abort(&self) -> bool {
        !self.signal.aborted.replace(true)
    }

    /// Check if the controller has aborted.
    pub fn is_aborted(&self) -> bool {
        self.signal.is_aborted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_reaches_all_signals() {
        let controller = AbortController::new();
        let a = controller.signal();
        let b = a.clone();

        assert!(a.check().is_ok());
        assert!(controller.abort());
        assert!(a.is_aborted());
        assert!(matches!(b.check(), Err(FetchError::Aborted)));
    }

    #[test]
    fn test_abort_twice() {
        let controller = AbortController::new();
        assert!(controller.abort());
        assert!(!controller.abort());
        assert!(controller.is_aborted());
    }

    #[test]
    fn test_independent_controllers() {
        let first = AbortController::new();
        let second = AbortController::new();
        first.abort();
        assert!(!second.signal().is_aborted());
    }
}
