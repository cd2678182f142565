//! Fixed-vector embedder for tests and wiring checks.

use crate::embed::EmbeddingsProvider;
use crate::errors::StoreError;
use std::{future::Future, pin::Pin};

/// Returns the same zero vector for any input. Test double only.
pub struct NoopEmbedder {
    dim: usize,
}

impl NoopEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl EmbeddingsProvider for NoopEmbedder {
    fn embed<'a>(
        &'a self,
        _text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, StoreError>> + Send + 'a>> {
        Box::pin(async move { Ok(vec![0.0; self.dim]) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emits_fixed_dimension() {
        let e = NoopEmbedder::new(8);
        let v = e.embed("bất kỳ").await.unwrap();
        assert_eq!(v.len(), 8);
    }
}
