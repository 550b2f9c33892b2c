//! screener-vector
//!
//! Exact, in-memory nearest-neighbour search over embedding vectors.
//! Nothing here is persisted: an index lives as long as its owner.

pub mod distance;
pub mod index;

pub use distance::{cosine_similarity, squared_l2};
pub use index::{FlatL2Index, Neighbors};
