//! Domain types shared by the parsers, the embedders, the index and the ranker.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type CandidateId = String;

/// Which side of a match a piece of text sits on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resume => f.write_str("resume"),
            Self::JobDescription => f.write_str("job description"),
        }
    }
}

/// Raw text plus its kind. Created per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    pub text: String,
}

impl Document {
    pub fn resume(text: impl Into<String>) -> Self {
        Self { kind: DocumentKind::Resume, text: text.into() }
    }

    pub fn job(text: impl Into<String>) -> Self {
        Self { kind: DocumentKind::JobDescription, text: text.into() }
    }

    /// True when the text carries no visible characters.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One résumé in a candidate pool, identified by a caller-meaningful id
/// (its path relative to the pool directory when loaded from disk).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub text: String,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// Seniority inferred from a job description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ExperienceLevel {
    #[serde(rename = "senior")]
    Senior,
    #[serde(rename = "mid-level")]
    MidLevel,
    #[serde(rename = "junior")]
    Junior,
    #[default]
    #[serde(rename = "entry-level")]
    EntryLevel,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Senior => "senior",
            Self::MidLevel => "mid-level",
            Self::Junior => "junior",
            Self::EntryLevel => "entry-level",
        };
        f.write_str(s)
    }
}

/// Fields pulled out of a job description by a [`crate::traits::JobParser`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedJob {
    pub title: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
}

/// Fields pulled out of a résumé by a [`crate::traits::ResumeParser`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedResume {
    pub sections: BTreeMap<String, String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

/// Qualitative bucket for a 0–100 score.
///
/// Lower bounds are inclusive: 85 is `Excellent`, 84.999 is `Good`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchLabel {
    #[serde(rename = "Weak match")]
    Weak,
    #[serde(rename = "Moderate match")]
    Moderate,
    #[serde(rename = "Good match")]
    Good,
    #[serde(rename = "Excellent match")]
    Excellent,
}

impl MatchLabel {
    pub const EXCELLENT_MIN: f32 = 85.0;
    pub const GOOD_MIN: f32 = 70.0;
    pub const MODERATE_MIN: f32 = 50.0;

    pub fn from_score(score: f32) -> Self {
        if score >= Self::EXCELLENT_MIN {
            Self::Excellent
        } else if score >= Self::GOOD_MIN {
            Self::Good
        } else if score >= Self::MODERATE_MIN {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match",
            Self::Good => "Good match",
            Self::Moderate => "Moderate match",
            Self::Weak => "Weak match",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one résumé against one job description.
///
/// `score` is in `[0, 100]`; `similarity` is the raw cosine similarity.
/// The title, requirement, skill and level fields are parser output and
/// carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub score: f32,
    pub similarity: f32,
    pub explanation: MatchLabel,
    pub job_title: String,
    pub job_requirements: Vec<String>,
    pub job_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub resume_skills: Vec<String>,
}

/// One entry of a ranked candidate list.
///
/// `score` is relative to the batch it was ranked in and must not be
/// compared with scores from another ranking call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedMatch {
    pub candidate_id: CandidateId,
    pub score: f32,
    pub distance: f32,
    pub explanation: MatchLabel,
}
