use screener_core::error::{Error, Result};

use crate::distance::squared_l2;

/// Result of a k-NN query: parallel sequences ordered by ascending distance.
///
/// `positions[i]` is the insertion position of the vector at `distances[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighbors {
    pub distances: Vec<f32>,
    pub positions: Vec<usize>,
}

impl Neighbors {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `(position, distance)` pairs in result order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.positions.iter().copied().zip(self.distances.iter().copied())
    }
}

/// Exhaustive nearest-neighbour index under squared L2 distance.
///
/// Append-only: a vector's handle is its insertion position, and the caller
/// keeps its own position → identifier mapping. Width is fixed at
/// construction. Not thread-safe for concurrent insert and query; give each
/// worker its own index.
#[derive(Debug, Clone)]
pub struct FlatL2Index {
    dim: usize,
    // Row-major, `len() * dim` values.
    data: Vec<f32>,
}

impl FlatL2Index {
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidConfig("index dimension must be > 0".into()));
        }
        Ok(Self { dim, data: Vec::new() })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append `vectors` in order. Every vector is checked first, so on a
    /// width mismatch nothing is inserted.
    pub fn insert(&mut self, vectors: &[Vec<f32>]) -> Result<()> {
        if let Some(bad) = vectors.iter().find(|v| v.len() != self.dim) {
            return Err(Error::DimensionMismatch { expected: self.dim, actual: bad.len() });
        }
        self.data.reserve(vectors.len() * self.dim);
        for v in vectors {
            self.data.extend_from_slice(v);
        }
        tracing::trace!(added = vectors.len(), total = self.len(), "index insert");
        Ok(())
    }

    /// The `min(k, len())` stored vectors nearest to `query`, by ascending
    /// squared L2 distance. Equal distances keep insertion order.
    pub fn query(&self, query: &[f32], k: usize) -> Result<Neighbors> {
        if query.len() != self.dim {
            return Err(Error::DimensionMismatch { expected: self.dim, actual: query.len() });
        }
        if k == 0 || self.is_empty() {
            return Ok(Neighbors::default());
        }

        let mut scored: Vec<(usize, f32)> = self
            .data
            .chunks_exact(self.dim)
            .map(|row| squared_l2(row, query))
            .enumerate()
            .collect();
        // sort_by is stable; that is the tie-break.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(k);

        let (positions, distances) = scored.into_iter().unzip();
        Ok(Neighbors { distances, positions })
    }

    /// Drop every stored vector; the width is kept.
    pub fn reset(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(FlatL2Index::new(0), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn neighbors_iter_pairs_positions_with_distances() {
        let n = Neighbors { distances: vec![0.5, 2.0], positions: vec![3, 1] };
        assert_eq!(n.iter().collect::<Vec<_>>(), vec![(3, 0.5), (1, 2.0)]);
        assert_eq!(n.len(), 2);
    }
}
