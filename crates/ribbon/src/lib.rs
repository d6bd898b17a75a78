//! Enumeration of combinatorial maps with a prescribed vertex degree multiset.
//!
//! A map (ribbon graph, rotation system) is stored as three involutions on
//! flags. The generator walks every connected way of pairing flags into edges and
//! emits each result in rooted canonical form; the consumer may collapse the
//! stream to sensed or unsensed isomorphism classes.
//!
//! API Policy
//! - The crate serves the `cli` driver and the test/bench suites. There is no
//!   stable public API; `api` collects the names callers normally need.

pub mod api;
pub mod flag_map;
pub mod generate;
pub mod multiset;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use flag_map::{FlagMap, Surface};
pub use generate::{Census, Equivalence, MapStream, SearchStats};
pub use multiset::DegreeMultiset;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::flag_map::{FlagMap, Surface};
    pub use crate::generate::{for_each_map, generate_maps, Census, Equivalence, MapStream};
    pub use crate::multiset::DegreeMultiset;
}
