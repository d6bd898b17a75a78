//! Depth-first backtracking over flag pairings.
//!
//! The cursor walks flags in index order. An unpaired flag is joined either to a
//! later unpaired flag of the current map or to the first flag of a freshly added
//! vertex. Every mutation runs inside a `with_*` scope that undoes it before the
//! scope returns, so the map and the multiset follow a strict stack discipline.

use std::ops::ControlFlow;

use crate::flag_map::FlagMap;
use crate::multiset::DegreeMultiset;

use super::types::SearchStats;

/// Enumerate every connected map realizing `degrees`, calling `emit` with the
/// rooted form of each. Runs to exhaustion.
pub fn for_each_map<F>(degrees: &DegreeMultiset, mut emit: F) -> SearchStats
where
    F: FnMut(FlagMap),
{
    try_for_each_map(degrees, |m| {
        emit(m);
        ControlFlow::Continue(())
    })
}

/// Like `for_each_map`, but stops as soon as `emit` breaks.
pub fn try_for_each_map<F>(degrees: &DegreeMultiset, emit: F) -> SearchStats
where
    F: FnMut(FlagMap) -> ControlFlow<()>,
{
    let mut runner = SearchRunner::new(degrees.clone(), emit);
    runner.solve();
    runner.stats
}

/// Collect every emitted map.
pub fn generate_maps(degrees: &DegreeMultiset) -> Vec<FlagMap> {
    let mut out = Vec::new();
    for_each_map(degrees, |m| out.push(m));
    out
}

/// Search context owning the single mutable map and degree multiset.
struct SearchRunner<F> {
    map: FlagMap,
    degs: DegreeMultiset,
    emit: F,
    stats: SearchStats,
}

impl<F> SearchRunner<F>
where
    F: FnMut(FlagMap) -> ControlFlow<()>,
{
    fn new(degs: DegreeMultiset, emit: F) -> Self {
        Self {
            map: FlagMap::new(),
            degs,
            emit,
            stats: SearchStats::default(),
        }
    }

    fn solve(&mut self) {
        // Seed with each distinct degree as the first vertex.
        for d in self.degs.distinct_values() {
            let flow = self.with_vertex(d, |s| s.recur(0));
            if flow.is_break() {
                return;
            }
        }
    }

    /// Add a vertex of degree `d` and take `d` from the multiset for the
    /// duration of `body`.
    fn with_vertex(
        &mut self,
        d: usize,
        body: impl FnOnce(&mut Self) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.map.add_vertex(d);
        self.degs.remove(d);
        let flow = body(self);
        self.degs.add(d);
        self.map.del_vertex(d);
        flow
    }

    /// Join flags `x` and `y` for the duration of `body`.
    fn with_edge(
        &mut self,
        x: usize,
        y: usize,
        body: impl FnOnce(&mut Self) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.map.add_edge(x, y);
        let flow = body(self);
        self.map.del_edge(x, y);
        flow
    }

    fn recur(&mut self, i: usize) -> ControlFlow<()> {
        self.stats.nodes += 1;
        let n = self.map.len();
        if i == n && self.degs.is_empty() {
            self.stats.leaves += 1;
            return self.leaf();
        }
        if i >= n {
            // Flags exhausted but vertices remain: they could never attach.
            return ControlFlow::Continue(());
        }
        if self.map.end(i).is_some() {
            return self.recur(i + 1);
        }

        // Join to an existing vertex.
        for j in i + 1..n {
            if self.map.end(j).is_none() && self.map.side(i) != j {
                let flow = self.with_edge(i, j, |s| s.recur(i + 1));
                if flow.is_break() {
                    return flow;
                }
            }
        }

        // Join to a new vertex through its first flag `n`.
        for d in self.degs.distinct_values() {
            let flow = self.with_vertex(d, |s| s.with_edge(i, n, |s| s.recur(i + 1)));
            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }

    fn leaf(&mut self) -> ControlFlow<()> {
        if !self.map.is_connected() {
            self.stats.disconnected += 1;
            return ControlFlow::Continue(());
        }
        match self.map.rooted_form() {
            Some(rooted) => {
                self.stats.emitted += 1;
                (self.emit)(rooted)
            }
            None => ControlFlow::Continue(()),
        }
    }
}
