//! Hotel retrieval facade over Qdrant.
//!
//! This crate provides a clean API to retrieve top‑K hotel documents for a
//! textual query, optionally constrained by exact-match metadata filters.
//! The design is flat (no deep nesting) and splits responsibilities into
//! focused modules.

mod config;
mod errors;
mod filters;
mod qdrant_facade;
mod record;
mod retrieve;

pub mod embed;

pub use config::StoreConfig;
pub use embed::EmbeddingsProvider;
pub use errors::StoreError;
pub use record::{HotelDoc, MetadataFilter, SearchQuery};

use tracing::trace;

/// High-level facade that wires configuration and Qdrant client.
///
/// This is the single entry point recommended for application code.
pub struct HotelStore {
    cfg: StoreConfig,
    client: qdrant_facade::QdrantFacade,
}

impl HotelStore {
    /// Constructs a new store from the given configuration.
    ///
    /// # Errors
    /// Returns `StoreError::Config` if the client initialization fails.
    pub fn new(cfg: StoreConfig) -> Result<Self, StoreError> {
        trace!("HotelStore::new collection={}", cfg.collection);
        let client = qdrant_facade::QdrantFacade::new(&cfg)?;
        Ok(Self { cfg, client })
    }

    /// Retrieves hotel documents for a textual query using the provided
    /// embedding provider.
    ///
    /// # Errors
    /// Returns embedding errors or Qdrant failures.
    pub async fn search(
        &self,
        query: SearchQuery<'_>,
        provider: &dyn EmbeddingsProvider,
    ) -> Result<Vec<HotelDoc>, StoreError> {
        trace!("HotelStore::search top_k={}", query.top_k);
        retrieve::search_hotels(&self.cfg, &self.client, query, provider).await
    }
}
