//! screener-match
//!
//! [`ResumeScreener`] wires embedding, the flat index and scoring together
//! for the two matching flows: one résumé against one job description,
//! and one job description against a pool of résumés.

use std::path::Path;
use std::time::Instant;

use screener_core::config::EmbeddingSettings;
use screener_core::corpus::ResumeLoader;
use screener_core::error::{Error, Result};
use screener_core::traits::{Embedder, JobParser, ResumeParser};
use screener_core::types::{Candidate, MatchLabel, MatchResult, RankedMatch};
use screener_rank::{rank_candidates, similarity_to_score};
use screener_text::{JobDescriptionParser, PatternResumeParser};
use screener_vector::{cosine_similarity, FlatL2Index};

/// Matching facade. Holds the embedder for its whole life; every call is
/// independent and builds whatever index it needs from scratch.
///
/// Inputs are not validated here: blank text is embedded like any other
/// text and simply scores low. Front ends reject it before calling in.
pub struct ResumeScreener<J = JobDescriptionParser, R = PatternResumeParser> {
    embedder: Box<dyn Embedder>,
    job_parser: J,
    resume_parser: R,
}

impl ResumeScreener {
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self::with_parsers(embedder, JobDescriptionParser::new(), PatternResumeParser::new())
    }

    /// Build the configured embedder (loading the model, if any) and wrap it.
    pub fn from_settings(settings: &EmbeddingSettings) -> Result<Self> {
        let embedder = screener_embed::get_default_embedder(settings).map_err(into_core_error)?;
        Ok(Self::new(embedder))
    }
}

impl<J, R> ResumeScreener<J, R>
where
    J: JobParser,
    R: ResumeParser,
{
    pub fn with_parsers(embedder: Box<dyn Embedder>, job_parser: J, resume_parser: R) -> Self {
        Self { embedder, job_parser, resume_parser }
    }

    pub fn embedder(&self) -> &dyn Embedder {
        self.embedder.as_ref()
    }

    /// Score one résumé against one job description by cosine similarity.
    ///
    /// Parser output is attached as-is; it does not influence the score.
    pub fn match_pair(&self, resume_text: &str, job_text: &str) -> Result<MatchResult> {
        let mut vectors = self.embed_checked(&[resume_text.to_string(), job_text.to_string()])?;
        let job_vec = vectors.pop().unwrap_or_default();
        let resume_vec = vectors.pop().unwrap_or_default();

        let similarity = cosine_similarity(&resume_vec, &job_vec);
        let score = similarity_to_score(similarity);
        let job = self.job_parser.parse_job(job_text);
        let resume = self.resume_parser.parse_resume(resume_text);
        tracing::debug!(score, similarity, title = %job.title, "scored pair");

        Ok(MatchResult {
            score,
            similarity,
            explanation: MatchLabel::from_score(score),
            job_title: job.title,
            job_requirements: job.requirements,
            job_skills: job.skills,
            experience_level: job.experience_level,
            resume_skills: resume.skills,
        })
    }

    /// Rank `pool` against `job_text` and return at most `top_k` entries.
    ///
    /// Scores are relative to this call's result batch. Equal scores keep
    /// pool order. An empty pool (or `top_k == 0`) gives an empty list.
    pub fn match_pool(&self, pool: &[Candidate], job_text: &str, top_k: usize) -> Result<Vec<RankedMatch>> {
        if pool.is_empty() || top_k == 0 {
            tracing::debug!(pool = pool.len(), top_k, "nothing to rank");
            return Ok(vec![]);
        }
        let start = Instant::now();

        let job_vec = self.embed_checked(&[job_text.to_string()])?.pop().unwrap_or_default();
        let texts: Vec<String> = pool.iter().map(|c| c.text.clone()).collect();
        let resume_vecs = self.embed_checked(&texts)?;

        // Position in the index == position in `pool`.
        let mut index = FlatL2Index::new(self.embedder.dim())?;
        index.insert(&resume_vecs)?;
        let neighbors = index.query(&job_vec, top_k.min(pool.len()))?;

        let ids = neighbors.positions.iter().map(|&pos| pool[pos].id.clone()).collect();
        let ranked = rank_candidates(ids, &neighbors.distances);
        tracing::info!(
            pool = pool.len(),
            returned = ranked.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "ranked resume pool"
        );
        Ok(ranked)
    }

    /// [`match_pool`](Self::match_pool) over every `.txt` résumé under `dir`.
    pub fn match_directory(&self, dir: &Path, job_text: &str, top_k: usize) -> Result<Vec<RankedMatch>> {
        let pool = ResumeLoader::new().load_dir(dir)?;
        self.match_pool(&pool, job_text, top_k)
    }

    /// Embed `texts` and check the backend kept its contract: one vector
    /// per input, each `dim()` wide.
    fn embed_checked(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let vectors = self.embedder.embed_batch(texts).map_err(|e| Error::embedding(&e))?;
        if vectors.len() != texts.len() {
            return Err(Error::Embedding(format!(
                "{} returned {} vectors for {} inputs",
                self.embedder.model_id(),
                vectors.len(),
                texts.len()
            )));
        }
        let dim = self.embedder.dim();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dim) {
            return Err(Error::DimensionMismatch { expected: dim, actual: bad.len() });
        }
        Ok(vectors)
    }
}

fn into_core_error(err: anyhow::Error) -> Error {
    match err.downcast::<Error>() {
        Ok(core) => core,
        Err(other) => Error::embedding(&other),
    }
}
