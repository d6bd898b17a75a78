//! Flag maps: graph embeddings on closed surfaces as three involutions.
//!
//! Purpose
//! - Store a map as `angle`, `side`, `end` over flag indices and grow/shrink it
//!   strictly last-in/first-out while the generator searches.
//! - Answer the topological questions the driver needs (connectivity, vertex and
//!   face orbits, Euler characteristic, orientability).
//! - Reduce a map to a canonical representative of its isomorphism class.
//!
//! Conventions
//! - Four flags per edge, `2d` flags per vertex of degree `d`.
//! - `end` is `Option<usize>`; `None` marks a flag not yet joined to an edge.
//! - Orientation: the positive side of a map is the set of flags reachable from
//!   flag 0 by `side∘angle` and `side∘end`. The map is orientable iff flag 1 is
//!   not positive.

mod canon;
mod topology;
mod types;

pub use topology::Surface;
pub use types::{FlagMap, Involution, MapError};
