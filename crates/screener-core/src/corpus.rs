//! Loads a pool of résumés from a directory of `.txt` files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Candidate;

#[derive(Debug, Clone, Default)]
pub struct ResumeLoader {
    limit: Option<usize>,
}

impl ResumeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the first `limit` files (in sorted path order).
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// Every `.txt` file under `dir`, sorted by path, as a candidate whose id is
    /// its path relative to `dir`. Blank files are skipped.
    pub fn load_dir(&self, dir: &Path) -> Result<Vec<Candidate>> {
        if !dir.is_dir() {
            return Err(Error::NotFound(format!("resume directory {}", dir.display())));
        }
        let mut files = list_txt_files(dir);
        if files.is_empty() {
            tracing::warn!(dir = %dir.display(), "no .txt resumes found");
            return Ok(vec![]);
        }
        if let Some(limit) = self.limit {
            if files.len() > limit {
                files.truncate(limit);
                tracing::info!(limit, "limited to first resumes");
            }
        }

        let mut candidates = Vec::with_capacity(files.len());
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = %file_path.display(), "reading resume {}/{}", file_index + 1, files.len());
            let text = read_file_content(file_path)?;
            if text.trim().is_empty() {
                tracing::warn!(file = %file_path.display(), "skipping blank resume");
                continue;
            }
            candidates.push(Candidate::new(candidate_id(file_path, dir), text));
        }
        tracing::info!(count = candidates.len(), dir = %dir.display(), "loaded resumes");
        Ok(candidates)
    }
}

fn read_file_content(file_path: &Path) -> Result<String> {
    match fs::read_to_string(file_path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
    }
}

/// Path relative to the pool root, so that same-named files in different
/// subdirectories stay distinct.
fn candidate_id(file_path: &Path, dir: &Path) -> String {
    let relative = file_path.strip_prefix(dir).unwrap_or(file_path);
    relative.to_string_lossy().replace('\\', "/")
}

fn list_txt_files(root: &Path) -> Vec<PathBuf> {
    let mut txt_files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();
    txt_files.sort();
    txt_files
}
