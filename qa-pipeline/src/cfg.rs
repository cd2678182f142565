//! Runtime configuration loaded from environment variables.

use hotel_store::StoreConfig;

/// Config bag for the pipeline. All fields have defaults via `from_env`.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Number of candidates requested from the vector store.
    pub top_k: u64,

    /// Qdrant endpoint and collection.
    pub qdrant_url: String,
    pub qdrant_collection: String,
    pub exact_search: bool,
}

impl PipelineConfig {
    /// Build from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            top_k: parse("RAG_TOP_K", 30),
            qdrant_url: env("QDRANT_URL", "http://127.0.0.1:6334"),
            qdrant_collection: env("QDRANT_COLLECTION", "hotels"),
            exact_search: env("RAG_EXACT_SEARCH", "false") == "true",
        }
    }

    /// Convert to a `hotel_store::StoreConfig` used by `HotelStore`.
    pub fn make_store_config(&self) -> StoreConfig {
        let qdrant_api_key = std::env::var("QDRANT_API_KEY").ok();

        StoreConfig {
            qdrant_url: self.qdrant_url.clone(),
            qdrant_api_key,
            collection: self.qdrant_collection.clone(),
            exact_search: self.exact_search,
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k).unwrap_or_else(|_| dflt.to_string())
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(dflt)
}
