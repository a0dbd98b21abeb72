//! In-memory fetch implementation.

use super::{AbortSignal, BoxFuture, Fetch, FetchError, FetchResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Serves canned JSON bodies by URL, for tests and offline hosts.
#[derive(Debug, Default)]
pub struct MemoryFetch {
    bodies: RefCell<HashMap<String, String>>,
    requests: Cell<usize>,
}

impl MemoryFetch {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw response body for `url`.
    pub fn insert(&self, url: impl Into<String>, body: impl Into<String>) {
        self.bodies.borrow_mut().insert(url.into(), body.into());
    }

    /// Register a JSON response for `url`.
    pub fn insert_json(&self, url: impl Into<String>, value: &serde_json::Value) {
        self.insert(url, value.to_string());
    }

    /// Number of fetches started.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }
}

impl Fetch for MemoryFetch {
    fn fetch(&self, url: &str, signal: &AbortSignal) -> BoxFuture<'_, FetchResult<serde_json::Value>> {
        let url = url.to_string();
        let signal = signal.clone();
        self.requests.set(self.requests.get() + 1);
        Box::pin(async move {
            signal.check()?;
            let body = self
                .bodies
                .borrow()
                .get(&url)
                .cloned()
                .ok_or_else(|| FetchError::NotFound(url.clone()))?;
            let value: serde_json::Value =
                serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
            // A response decoded after abort is still discarded.
            signal.check()?;
            Ok(value)
        })
    }
}
