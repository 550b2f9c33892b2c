//! screener-text
//!
//! Pattern-based extraction of titles, requirements, skills and résumé
//! sections. Output is best-effort metadata: the parsers never fail and an
//! empty field is a valid answer.

pub mod job;
pub mod resume;
pub mod skills;

pub use job::JobDescriptionParser;
pub use resume::PatternResumeParser;
pub use skills::{find_known_skills, KNOWN_SKILLS};
