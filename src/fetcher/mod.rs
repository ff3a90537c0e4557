pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

#[async_trait]
pub trait Fetcher {
    /// Retrieve the raw bytes of a feed document.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
