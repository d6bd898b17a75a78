//! Consumer-side filter: keep one representative per equivalence class and
//! tally kept maps per surface.

use std::collections::{BTreeMap, HashSet};

use crate::flag_map::{FlagMap, Surface};

use super::types::Equivalence;

/// Equivalence filter plus per-surface counts.
///
/// Under a collapsing equivalence, a rooted map is kept iff it equals its own
/// unrooted form; the seen-set makes each class appear at most once.
#[derive(Clone, Debug, Default)]
pub struct Census {
    equivalence: Equivalence,
    seen: HashSet<FlagMap>,
    offered: usize,
    by_surface: BTreeMap<Surface, usize>,
}

impl Census {
    pub fn new(equivalence: Equivalence) -> Self {
        Self {
            equivalence,
            ..Self::default()
        }
    }

    pub fn equivalence(&self) -> Equivalence {
        self.equivalence
    }

    /// Offer one map from the generator; returns it with its surface if kept.
    pub fn offer(&mut self, m: FlagMap) -> Option<(FlagMap, Surface)> {
        self.offered += 1;
        if self.equivalence.collapses() {
            let canonical = m.unrooted_form(self.equivalence.orientation_only())?;
            if canonical != m || !self.seen.insert(canonical) {
                return None;
            }
        }
        let surface = m.surface();
        *self.by_surface.entry(surface).or_insert(0) += 1;
        Some((m, surface))
    }

    /// Maps offered so far.
    pub fn offered(&self) -> usize {
        self.offered
    }

    /// Maps kept so far.
    pub fn kept(&self) -> usize {
        self.by_surface.values().sum()
    }

    pub fn count(&self, surface: Surface) -> usize {
        self.by_surface.get(&surface).copied().unwrap_or(0)
    }

    /// Kept counts per surface, orientable surfaces first, by increasing genus.
    pub fn by_surface(&self) -> impl Iterator<Item = (Surface, usize)> + '_ {
        self.by_surface.iter().map(|(s, c)| (*s, *c))
    }
}
