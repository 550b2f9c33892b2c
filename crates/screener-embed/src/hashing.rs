use anyhow::Result;
use std::hash::Hasher;
use twox_hash::XxHash64;

use screener_core::traits::Embedder;

/// Changing the seed, the stop words or the token rules changes every vector.
const HASH_SEED: u64 = 0;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "is", "it", "its",
    "of", "on", "or", "our", "the", "this", "that", "to", "we", "will", "with", "you", "your",
];

/// Deterministic bag-of-words embedder based on feature hashing.
///
/// Every non-stop-word token adds 1.0 to bucket `xxh64(token) % dim`; the
/// result is L2-normalized. All components are non-negative, so cosine
/// similarity between two hashed texts lies in `[0, 1]`. Text without any
/// token (including the empty string) maps to the zero vector.
///
/// No model files are needed, which makes it the backend for tests and
/// offline runs.
pub struct HashEmbedder {
    dim: usize,
    id: String,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        let dim = dim.max(1);
        Self { dim, id: format!("hashing:xxh64:d{dim}") }
    }

    fn bucket(&self, token: &str) -> usize {
        let mut hasher = XxHash64::with_seed(HASH_SEED);
        hasher.write(token.as_bytes());
        (hasher.finish() % self.dim as u64) as usize
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0f32; self.dim];
        for token in tokens(text) {
            v[self.bucket(&token)] += 1.0;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        v
    }
}

/// Lowercased runs of alphanumerics, `+` and `#` (so `c++` and `c#` survive),
/// minus stop words.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
}

impl Embedder for HashEmbedder {
    fn model_id(&self) -> &str { &self.id }
    fn dim(&self) -> usize { self.dim }
    fn max_len(&self) -> usize { usize::MAX }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_drop_stop_words_and_keep_symbols() {
        let toks: Vec<String> = tokens("The C++ and C# team, with Rust!").collect();
        assert_eq!(toks, vec!["c++", "c#", "team", "rust"]);
    }

    #[test]
    fn empty_text_is_the_zero_vector() {
        let v = HashEmbedder::new(16).embed_one("");
        assert_eq!(v, vec![0.0; 16]);
        let v = HashEmbedder::new(16).embed_one("and the of");
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn zero_dimension_is_bumped_to_one() {
        assert_eq!(HashEmbedder::new(0).dim(), 1);
    }
}
