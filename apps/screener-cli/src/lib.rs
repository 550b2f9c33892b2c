//! Plumbing shared by the `screener` and `screener-demo` binaries: input
//! checks, spinners, model loading and result printing.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use screener_core::config::Settings;
use screener_core::types::{Document, DocumentKind, MatchResult, RankedMatch};
use screener_match::ResumeScreener;

/// How many requirements / skills the text report lists.
const REPORT_ITEMS: usize = 5;

/// Read a document from disk, refusing empty or whitespace-only files.
pub fn read_document(path: &Path, kind: DocumentKind) -> Result<Document> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {kind} {}", path.display()))?;
    let doc = Document { kind, text };
    ensure_not_blank(&doc).with_context(|| path.display().to_string())?;
    Ok(doc)
}

/// The matcher embeds blank text without complaint; front ends stop it here.
pub fn ensure_not_blank(doc: &Document) -> Result<()> {
    if doc.is_blank() {
        bail!("{} text is empty", doc.kind);
    }
    Ok(())
}

pub fn spinner(msg: impl Into<String>) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Build the configured screener behind a spinner; model loading can take a while.
pub fn load_screener(settings: &Settings) -> Result<ResumeScreener> {
    let pb = spinner(format!("Loading embedding model {}", settings.embedding.model_name))?;
    let screener = ResumeScreener::from_settings(&settings.embedding);
    pb.finish_and_clear();
    let screener = screener?;
    tracing::info!(model = screener.embedder().model_id(), "screener ready");
    Ok(screener)
}

pub fn print_pair(result: &MatchResult) {
    println!("{}", "=".repeat(60));
    println!("RESUME SCREENING RESULT");
    println!("{}", "=".repeat(60));
    println!("Job Title: {}", result.job_title);
    println!("Experience Level: {}", result.experience_level);
    println!("Match Score: {:.1}%", result.score);
    println!("Similarity: {:.3}", result.similarity);
    println!("Assessment: {}", result.explanation);
    println!("\nJob Requirements:");
    for req in result.job_requirements.iter().take(REPORT_ITEMS) {
        println!("  - {req}");
    }
    println!("\nCandidate Skills:");
    for skill in result.resume_skills.iter().take(REPORT_ITEMS) {
        println!("  - {skill}");
    }
    println!("{}", "=".repeat(60));
}

/// One line per candidate; `*` marks scores at or above `threshold`.
pub fn print_ranking(ranked: &[RankedMatch], threshold: f32) {
    if ranked.is_empty() {
        println!("No resumes to rank.");
        return;
    }
    println!("{:>4}  {:>6}  {:>8}  {:<16}  candidate", "rank", "score", "distance", "assessment");
    for (i, m) in ranked.iter().enumerate() {
        let mark = if m.score >= threshold { '*' } else { ' ' };
        println!(
            "{:>4}  {:>6.1}  {:>8.4}  {:<16}  {}{mark}",
            i + 1,
            m.score,
            m.distance,
            m.explanation.as_str(),
            m.candidate_id
        );
    }
    println!("\n* score >= {threshold:.1}. Scores are relative to this ranking only.");
}

/// Ranked list as JSON, each entry flagged against `threshold`.
pub fn ranking_json(ranked: &[RankedMatch], threshold: f32) -> Result<String> {
    let entries: Vec<serde_json::Value> = ranked
        .iter()
        .map(|m| -> Result<serde_json::Value> {
            let mut value = serde_json::to_value(m)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("meets_threshold".into(), serde_json::Value::Bool(m.score >= threshold));
            }
            Ok(value)
        })
        .collect::<Result<_>>()?;
    Ok(serde_json::to_string_pretty(&serde_json::json!({
        "score_threshold": threshold,
        "results": entries,
    }))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::types::MatchLabel;

    #[test]
    fn blank_documents_are_rejected() {
        assert!(ensure_not_blank(&Document::job("  \n\t")).is_err());
        assert!(ensure_not_blank(&Document::resume("Python")).is_ok());
    }

    #[test]
    fn read_document_rejects_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        std::fs::write(&path, "\n   \n").unwrap();
        let err = read_document(&path, DocumentKind::JobDescription).unwrap_err();
        assert!(format!("{err:#}").contains("empty"));

        std::fs::write(&path, "Backend Engineer").unwrap();
        assert_eq!(read_document(&path, DocumentKind::JobDescription).unwrap().text, "Backend Engineer");
    }

    #[test]
    fn ranking_json_flags_threshold() {
        let ranked = vec![
            RankedMatch { candidate_id: "a.txt".into(), score: 100.0, distance: 0.0, explanation: MatchLabel::Excellent },
            RankedMatch { candidate_id: "b.txt".into(), score: 10.0, distance: 1.5, explanation: MatchLabel::Weak },
        ];
        let json: serde_json::Value = serde_json::from_str(&ranking_json(&ranked, 50.0).unwrap()).unwrap();
        assert_eq!(json["results"][0]["meets_threshold"], true);
        assert_eq!(json["results"][1]["meets_threshold"], false);
        assert_eq!(json["results"][1]["explanation"], "Weak match");
    }
}
