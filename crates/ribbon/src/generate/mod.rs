//! Exhaustive generation of connected maps with a prescribed degree multiset.
//!
//! Purpose
//! - Walk every way of pairing flags into edges, attaching new vertices on demand,
//!   and hand each connected result (in rooted canonical form) to a consumer.
//! - Provide the consumer side as well: an equivalence filter that keeps one
//!   representative per sensed or unsensed isomorphism class.
//!
//! Shape
//! - `dfs`: the backtracking runner; one owned `FlagMap` + `DegreeMultiset`,
//!   mutated only inside scoped `with_vertex`/`with_edge` calls.
//! - `stream`: rendezvous handoff to a consumer on another thread.
//! - `census`: the dedup filter and per-surface tally.
//!
//! The search has no failure mode. An odd degree sum simply yields no maps.

mod census;
mod dfs;
mod stream;
mod types;

pub use census::Census;
pub use dfs::{for_each_map, generate_maps, try_for_each_map};
pub use stream::MapStream;
pub use types::{Equivalence, SearchStats, SelectorConflict};
