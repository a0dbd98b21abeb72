//! Data-fetch contract used by table and chart widgets.
//!
//! Widgets only need a cancellable JSON fetch. Cancellation travels through
//! an [`AbortSignal`] the widget shares with every request it starts and
//! aborts from its own `destroy`.

mod abort;
mod memory;

pub use abort::{AbortController, AbortSignal};
pub use memory::MemoryFetch;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Fetch errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request aborted")]
    Aborted,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Fetch error: {0}")]
    Other(String),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Boxed future for fetch operations. Not `Send`: widgets live on the
/// single UI thread.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A JSON data source.
pub trait Fetch {
    /// Fetch and decode the JSON document at `url`.
    ///
    /// Resolves to [`FetchError::Aborted`] if `signal` is aborted before
    /// the response is delivered.
    fn fetch(&self, url: &str, signal: &AbortSignal) -> BoxFuture<'_, FetchResult<serde_json::Value>>;
}
