//! Canonical relabeling and the total order used to pick class representatives.
//!
//! A breadth-first walk from a root flag, visiting `angle`, `side`, `end` in that
//! order, numbers every flag of a connected map. Relabeling by that numbering
//! gives the rooted form; the minimum over all admissible roots is the
//! representative of the isomorphism class.

use std::cmp::Ordering;
use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::FlagMap;

impl FlagMap {
    /// Breadth-first numbering from `root`: `order[old] = new`.
    ///
    /// Returns `None` when some flag is unreachable from `root` (disconnected or
    /// incomplete map); the numbering is then not a bijection.
    pub fn canonical_order(&self, root: usize) -> Option<Vec<usize>> {
        let n = self.len();
        if root >= n {
            return None;
        }
        let mut order: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::with_capacity(n);
        order[root] = Some(0);
        queue.push_back(root);
        let mut next = 1;
        while let Some(x) = queue.pop_front() {
            for y in [Some(self.angle[x]), Some(self.side[x]), self.end[x]]
                .into_iter()
                .flatten()
            {
                if order[y].is_none() {
                    order[y] = Some(next);
                    next += 1;
                    queue.push_back(y);
                }
            }
        }
        order.into_iter().collect()
    }

    /// Apply the bijection `perm` (old index -> new index) to all three involutions.
    pub fn relabel(&self, perm: &[usize]) -> FlagMap {
        let n = self.len();
        assert_eq!(perm.len(), n, "relabeling must cover every flag");
        let mut res = FlagMap {
            angle: vec![0; n],
            side: vec![0; n],
            end: vec![None; n],
        };
        for i in 0..n {
            let j = perm[i];
            res.angle[j] = perm[self.angle[i]];
            res.side[j] = perm[self.side[i]];
            res.end[j] = self.end[i].map(|y| perm[y]);
        }
        res
    }

    /// Total order: per flag index compare `angle`, then `end`, then `side`;
    /// the first difference decides. Shorter maps sort first.
    pub fn compare(&self, other: &FlagMap) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| {
            (0..self.len())
                .map(|i| {
                    self.angle[i]
                        .cmp(&other.angle[i])
                        .then(self.end[i].cmp(&other.end[i]))
                        .then(self.side[i].cmp(&other.side[i]))
                })
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Canonical form for root flag 0. `None` if the map is not connected.
    pub fn rooted_form(&self) -> Option<FlagMap> {
        self.canonical_order(0).map(|o| self.relabel(&o))
    }

    /// Minimum rooted form over all roots; with `orientation_only`, only roots on
    /// the positive side (see `side_coloring`) are tried, so orientation-reversing
    /// relabelings are excluded. `None` if the map is not connected.
    pub fn unrooted_form(&self, orientation_only: bool) -> Option<FlagMap> {
        let positive = if orientation_only {
            self.side_coloring()
        } else {
            vec![true; self.len()]
        };
        let mut best: Option<FlagMap> = None;
        for root in (0..self.len()).filter(|&r| positive[r]) {
            let candidate = self.relabel(&self.canonical_order(root)?);
            let better = best
                .as_ref()
                .map_or(true, |b| candidate.compare(b).is_lt());
            if better {
                best = Some(candidate);
            }
        }
        best
    }

    /// Isomorphic copy under a uniformly random relabeling.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> FlagMap {
        let mut perm: Vec<usize> = (0..self.len()).collect();
        perm.shuffle(rng);
        self.relabel(&perm)
    }
}

impl PartialOrd for FlagMap {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FlagMap {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
