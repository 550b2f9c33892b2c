use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

use screener_core::traits::ResumeParser;
use screener_core::types::ParsedResume;

use crate::skills::find_known_skills;

/// A heading line, optionally followed by inline content after a colon
/// (`Skills: Rust, Go`).
static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(experience|education|skills?|projects?|certifications?)\s*(?::\s*(.*))?$")
        .expect("static regex")
});
static ROLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z ]*?(?:Engineer|Manager|Developer|Analyst|Designer)\b").expect("static regex")
});
static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:bachelor|master|phd|diploma|associate)[^.\n]*").expect("static regex")
});
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s*").expect("static regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternResumeParser;

impl PatternResumeParser {
    pub fn new() -> Self {
        Self
    }
}

impl ResumeParser for PatternResumeParser {
    fn parse_resume(&self, text: &str) -> ParsedResume {
        let sections = extract_sections(text);
        let skills = extract_skills(text, sections.get("skills").map(String::as_str));
        ParsedResume {
            skills,
            experience: extract_experience(text),
            education: extract_education(text),
            sections,
        }
    }
}

/// Canonical plural section name: `Skill` → `skills`.
fn section_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    match lower.as_str() {
        "experience" | "education" => lower,
        _ if lower.ends_with('s') => lower,
        _ => format!("{lower}s"),
    }
}

fn extract_sections(text: &str) -> BTreeMap<String, String> {
    let mut sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;
    for line in text.lines().map(str::trim) {
        if let Some(caps) = SECTION_HEADING.captures(line) {
            let name = section_name(&caps[1]);
            let body = sections.entry(name.clone()).or_default();
            if let Some(inline) = caps.get(2).map(|m| m.as_str().trim()).filter(|s| !s.is_empty()) {
                body.push(inline.to_string());
            }
            current = Some(name);
            continue;
        }
        if let Some(name) = &current {
            sections.entry(name.clone()).or_default().push(line.to_string());
        }
    }
    sections
        .into_iter()
        .map(|(name, lines)| (name, lines.join("\n").trim().to_string()))
        .filter(|(_, body)| !body.is_empty())
        .collect()
}

/// Entries of the skills section (up to its first blank line) first, then
/// vocabulary skills found anywhere, deduplicated case-insensitively in order
/// of first appearance.
fn extract_skills(text: &str, skills_section: Option<&str>) -> Vec<String> {
    let listed = skills_section
        .and_then(|body| body.split("\n\n").next())
        .into_iter()
        .flat_map(|body| body.split(|c: char| matches!(c, ',' | ';' | '|' | '\n')))
        .map(|item| LIST_MARKER.replace(item.trim(), "").trim().to_string())
        .filter(|item| !item.is_empty());

    let mut seen = HashSet::new();
    listed
        .chain(find_known_skills(text))
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .collect()
}

fn extract_experience(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|line| ROLE.is_match(line))
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect()
}

fn extract_education(text: &str) -> Vec<String> {
    DEGREE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_and_block_sections() {
        let text = "Skills: Rust, Go\nExperience:\nBackend Engineer at Acme\n\nEducation\nBSc Physics";
        let sections = extract_sections(text);
        assert_eq!(sections.get("skills").map(String::as_str), Some("Rust, Go"));
        assert_eq!(sections.get("experience").map(String::as_str), Some("Backend Engineer at Acme"));
        assert_eq!(sections.get("education").map(String::as_str), Some("BSc Physics"));
    }

    #[test]
    fn sentence_starting_with_heading_word_is_not_a_heading() {
        let sections = extract_sections("Experience with large systems");
        assert!(sections.is_empty());
    }

    #[test]
    fn skills_merge_section_items_and_vocabulary() {
        let text = "SKILLS:\n- Python\n- Public speaking\n\nShipped services on AWS with docker";
        let skills = extract_skills(text, extract_sections(text).get("skills").map(String::as_str));
        assert_eq!(skills, vec!["Python", "Public speaking", "aws", "docker"]);
    }
}
