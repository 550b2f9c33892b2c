use crate::types::{ParsedJob, ParsedResume};

/// Turns text into fixed-width vectors.
///
/// Implementations load their model once and are read-only afterwards.
/// `embed_batch` returns one vector per input, in input order, each of
/// length `dim()`.
pub trait Embedder: Send + Sync {
    /// Stable identifier for the backend and model (e.g. `sentence:all-MiniLM-L6-v2:d384`).
    fn model_id(&self) -> &str;
    fn dim(&self) -> usize;
    fn max_len(&self) -> usize;
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;

    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        self.embed_batch(&[text.to_string()])?
            .pop()
            .ok_or_else(|| anyhow::anyhow!("embedder returned no vector for a single input"))
    }
}

/// Extracts structured fields from a job description. Best effort: never fails.
pub trait JobParser: Send + Sync {
    fn parse_job(&self, text: &str) -> ParsedJob;
}

/// Extracts structured fields from a résumé. Best effort: never fails.
pub trait ResumeParser: Send + Sync {
    fn parse_resume(&self, text: &str) -> ParsedResume;
}
