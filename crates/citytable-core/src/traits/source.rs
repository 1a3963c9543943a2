//! City source trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::types::{Offset, Page};

/// Something that can fetch pages of city records.
#[async_trait]
pub trait CitySource: Send + Sync {
    /// Fetch the page starting at `offset`.
    ///
    /// Implementations issue exactly one request per call and never retry.
    async fn fetch_page(&self, offset: Offset) -> Result<Page>;
}

#[async_trait]
impl<S: CitySource + ?Sized> CitySource for Arc<S> {
    async fn fetch_page(&self, offset: Offset) -> Result<Page> {
        (**self).fetch_page(offset).await
    }
}
