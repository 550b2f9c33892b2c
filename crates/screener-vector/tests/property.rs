//! Property-based tests for the flat index.

use proptest::prelude::*;
use screener_vector::{squared_l2, FlatL2Index};

const DIM: usize = 4;

fn vector_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, DIM)
}

/// Small integer grid so that equal distances actually occur.
fn grid_vector_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec((-2i8..=2).prop_map(f32::from), DIM)
}

proptest! {
    /// Property: a query returns exactly min(k, n) hits.
    #[test]
    fn prop_result_length(rows in prop::collection::vec(vector_strategy(), 0..20),
                          query in vector_strategy(),
                          k in 0usize..30) {
        let mut index = FlatL2Index::new(DIM).unwrap();
        index.insert(&rows).unwrap();
        let hits = index.query(&query, k).unwrap();
        prop_assert_eq!(hits.len(), k.min(rows.len()));
        prop_assert_eq!(hits.distances.len(), hits.positions.len());
    }

    /// Property: distances are ascending and match the stored vectors.
    #[test]
    fn prop_distances_ascending(rows in prop::collection::vec(vector_strategy(), 1..20),
                                query in vector_strategy()) {
        let mut index = FlatL2Index::new(DIM).unwrap();
        index.insert(&rows).unwrap();
        let hits = index.query(&query, rows.len()).unwrap();

        for w in hits.distances.windows(2) {
            prop_assert!(w[0] <= w[1], "not ascending: {:?}", hits.distances);
        }
        for (pos, dist) in hits.iter() {
            prop_assert_eq!(dist, squared_l2(&rows[pos], &query));
        }
    }

    /// Property: ties are reported in insertion order.
    #[test]
    fn prop_ties_keep_insertion_order(rows in prop::collection::vec(grid_vector_strategy(), 1..30),
                                      query in grid_vector_strategy()) {
        let mut index = FlatL2Index::new(DIM).unwrap();
        index.insert(&rows).unwrap();
        let hits = index.query(&query, rows.len()).unwrap();

        let pairs: Vec<(usize, f32)> = hits.iter().collect();
        for w in pairs.windows(2) {
            if w[0].1 == w[1].1 {
                prop_assert!(w[0].0 < w[1].0, "tie out of order: {:?}", pairs);
            }
        }
    }
}
