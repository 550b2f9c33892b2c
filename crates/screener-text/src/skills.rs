use once_cell::sync::Lazy;
use regex::Regex;

/// Technical skills recognized anywhere in a document, in reporting order.
pub const KNOWN_SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "c++", "rust", "golang",
    "sql", "nosql", "mongodb", "postgres", "postgresql", "mysql", "redis",
    "react", "angular", "vue", "node", "django", "flask",
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "linux", "git",
    "kafka", "spark", "graphql",
    "machine learning", "deep learning", "ai", "nlp", "pytorch", "tensorflow",
];

// Skill names contain `+` and `#`, so a plain `\b` is not enough: a match
// must not be glued to another word character on either side.
static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    KNOWN_SKILLS
        .iter()
        .filter_map(|&skill| {
            let body = skill
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            let pattern = format!(r"(?i)(?:^|[^a-z0-9+#]){body}(?:$|[^a-z0-9+#])");
            match Regex::new(&pattern) {
                Ok(re) => Some((skill, re)),
                Err(err) => {
                    tracing::error!(skill, error = %err, "invalid skill pattern");
                    None
                }
            }
        })
        .collect()
});

/// Known skills mentioned in `text`, lowercase, in [`KNOWN_SKILLS`] order.
pub fn find_known_skills(text: &str) -> Vec<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| (*skill).to_string())
        .collect()
}
