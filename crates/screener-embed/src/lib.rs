//! screener-embed
//!
//! Text → vector backends behind [`screener_core::traits::Embedder`]:
//! a candle sentence-transformer and a feature-hashing fallback.

use anyhow::Result;
use std::path::{Path, PathBuf};

use screener_core::config::{expand_path, EmbeddingBackend, EmbeddingSettings};
use screener_core::traits::Embedder;

pub mod device;
mod hashing;
pub mod pool;
mod sentence;
pub mod tokenize;

pub use hashing::HashEmbedder;
pub use pool::masked_mean_l2;
pub use sentence::SentenceEmbedder;

/// Env switch that forces [`HashEmbedder`] regardless of configuration.
pub const FAKE_EMBEDDINGS_ENV: &str = "APP_USE_FAKE_EMBEDDINGS";

fn fake_embeddings_requested() -> bool {
    std::env::var(FAKE_EMBEDDINGS_ENV)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Build the configured backend. The sentence model is loaded here, once;
/// callers keep the returned embedder for the life of the process.
pub fn get_default_embedder(settings: &EmbeddingSettings) -> Result<Box<dyn Embedder>> {
    if fake_embeddings_requested() || settings.backend == EmbeddingBackend::Hashing {
        tracing::info!(dim = settings.dimension, "using hashing embedder");
        return Ok(Box::new(HashEmbedder::new(settings.dimension)));
    }
    let model_dir = resolve_model_dir(settings)?;
    Ok(Box::new(SentenceEmbedder::load(&model_dir, &settings.model_name, settings.max_len)?))
}

/// First existing directory among: `embedding.model_dir`, `$APP_MODEL_DIR`,
/// `$MODEL_DIR`, `models/<model_name>`, `../models/<model_name>`.
pub fn resolve_model_dir(settings: &EmbeddingSettings) -> Result<PathBuf> {
    let mut candidates: Vec<(&str, PathBuf)> = Vec::new();
    if let Some(dir) = &settings.model_dir {
        candidates.push(("embedding.model_dir", expand_path(dir)));
    }
    for var in ["APP_MODEL_DIR", "MODEL_DIR"] {
        if let Ok(dir) = std::env::var(var) {
            candidates.push((var, expand_path(dir)));
        }
    }
    candidates.push(("default", Path::new("models").join(&settings.model_name)));
    candidates.push(("default", Path::new("../models").join(&settings.model_name)));

    for (source, path) in candidates {
        if path.is_dir() {
            tracing::info!(source, dir = %path.display(), "using model dir");
            return Ok(path);
        }
        tracing::debug!(source, dir = %path.display(), "model dir not found");
    }
    Err(screener_core::Error::NotFound(format!(
        "model directory for {}; set embedding.model_dir or APP_MODEL_DIR",
        settings.model_name
    ))
    .into())
}
