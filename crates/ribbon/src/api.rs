//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the driver and
//!   for experiments. Breaking changes are allowed and expected.

// Flag maps and their topology
pub use crate::flag_map::{FlagMap, Involution, MapError, Surface};
// Degree input
pub use crate::multiset::{parse_degree, DegreeError, DegreeMultiset};
// Generation and the consumer-side filter
pub use crate::generate::{
    for_each_map, generate_maps, try_for_each_map, Census, Equivalence, MapStream, SearchStats,
    SelectorConflict,
};

/// Enumerate `degrees` and keep one map per class of `equivalence`.
///
/// Pre: none; an empty or odd-sum multiset yields an empty result.
/// Post: maps in generation order, each with its surface.
pub fn enumerate_classes(
    degrees: &DegreeMultiset,
    equivalence: Equivalence,
) -> Vec<(FlagMap, Surface)> {
    let mut census = Census::new(equivalence);
    let mut kept = Vec::new();
    for_each_map(degrees, |m| {
        if let Some(entry) = census.offer(m) {
            kept.push(entry);
        }
    });
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_of_a_single_loop() {
        let degrees: DegreeMultiset = "2".parse().unwrap();
        let kept = enumerate_classes(&degrees, Equivalence::Unsensed);
        let surfaces: Vec<String> = kept.iter().map(|(_, s)| s.to_string()).collect();
        assert_eq!(surfaces.len(), 2);
        assert!(surfaces.contains(&"0 +".to_string()));
        assert!(surfaces.contains(&"1 -".to_string()));
    }

    #[test]
    fn odd_sum_has_no_classes() {
        let degrees: DegreeMultiset = "3".parse().unwrap();
        assert!(enumerate_classes(&degrees, Equivalence::Sensed).is_empty());
    }
}
