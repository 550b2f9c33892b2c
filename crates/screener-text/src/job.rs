use once_cell::sync::Lazy;
use regex::Regex;

use screener_core::traits::JobParser;
use screener_core::types::{ExperienceLevel, ParsedJob};

use crate::skills::find_known_skills;

/// How many non-blank leading lines may carry an explicit title.
const TITLE_SCAN_LINES: usize = 5;

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s+(.*)$").expect("static regex"));
static SENIOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsenior\b|10\+\s*years").expect("static regex"));
static JUNIOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bjunior\b|0-2\s*years").expect("static regex"));
static MID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bmid\b|3-5\s*years").expect("static regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct JobDescriptionParser;

impl JobDescriptionParser {
    pub fn new() -> Self {
        Self
    }
}

impl JobParser for JobDescriptionParser {
    fn parse_job(&self, text: &str) -> ParsedJob {
        let skills = find_known_skills(text);
        let mut requirements = extract_requirements(text);
        if requirements.is_empty() {
            // No requirements section: the skills named in the text are the requirements.
            requirements = skills.clone();
        }
        ParsedJob {
            title: extract_title(text),
            requirements,
            skills,
            experience_level: extract_experience_level(text),
        }
    }
}

fn extract_title(text: &str) -> String {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.clone().next().unwrap_or_default();
    for line in lines.by_ref().take(TITLE_SCAN_LINES) {
        let lower = line.to_lowercase();
        if lower.contains("position") || lower.contains("title") {
            let title = line.rsplit(':').next().unwrap_or_default().trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }
    }
    first.to_string()
}

fn extract_requirements(text: &str) -> Vec<String> {
    let mut requirements = Vec::new();
    let mut capturing = false;
    for line in text.lines() {
        let line = line.trim();
        if !capturing {
            capturing = line.to_lowercase().contains("requirement");
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if is_heading(line) {
            break;
        }
        if let Some(caps) = BULLET.captures(line) {
            let item = caps[1].trim();
            if !item.is_empty() {
                requirements.push(item.to_string());
            }
        } else if !line.starts_with(char::is_uppercase) {
            requirements.push(line.to_string());
        }
    }
    requirements
}

/// `RESPONSIBILITIES:`, `Benefits:`, `NICE TO HAVE` and the like.
fn is_heading(line: &str) -> bool {
    if BULLET.is_match(line) || line.split_whitespace().count() > 4 {
        return false;
    }
    let shouting = line.chars().any(char::is_alphabetic)
        && line.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase);
    line.ends_with(':') || shouting
}

fn extract_experience_level(text: &str) -> ExperienceLevel {
    if SENIOR.is_match(text) {
        ExperienceLevel::Senior
    } else if JUNIOR.is_match(text) {
        ExperienceLevel::Junior
    } else if MID.is_match(text) {
        ExperienceLevel::MidLevel
    } else {
        ExperienceLevel::EntryLevel
    }
}
