//! Gallery operations the page triggers but never implements itself.

use thiserror::Error;

use crate::timers;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("service unavailable")]
    Unavailable,
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Catalog search and newsletter signup, as seen from the page.
///
/// Futures here are not Send: everything runs on the browser main thread.
#[allow(async_fn_in_trait)]
pub trait GalleryBackend {
    async fn search(&self, query: &str) -> Result<(), BackendError>;
    async fn subscribe(&self, email: &str) -> Result<(), BackendError>;
}

/// Stand-in backend: logs the request, waits the advertised latency,
/// succeeds.
// TODO: replace with an HTTP client once the catalog API is deployed.
#[derive(Debug, Clone)]
pub struct SimulatedGallery {
    pub search_delay_ms: i32,
    pub subscribe_delay_ms: i32,
}

impl Default for SimulatedGallery {
    fn default() -> Self {
        Self {
            search_delay_ms: 500,
            subscribe_delay_ms: 1000,
        }
    }
}

impl GalleryBackend for SimulatedGallery {
    async fn search(&self, query: &str) -> Result<(), BackendError> {
        log::info!("Searching catalog for {query:?}");
        timers::sleep(self.search_delay_ms).await;
        Ok(())
    }

    async fn subscribe(&self, email: &str) -> Result<(), BackendError> {
        log::debug!("Subscribing {email} to the newsletter");
        timers::sleep(self.subscribe_delay_ms).await;
        Ok(())
    }
}
