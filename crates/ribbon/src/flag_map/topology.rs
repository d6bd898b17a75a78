//! Connectivity, orientability and orbit counts.
//!
//! Vertices are orbits of `<angle, side>`, faces orbits of `<angle, end>`,
//! edges are blocks of four flags. Face and orientation queries need a complete map.

use std::collections::VecDeque;
use std::fmt;

use super::types::FlagMap;

/// Closed surface carrying a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Surface {
    Orientable { genus: i64 },
    NonOrientable { crosscaps: i64 },
}

impl Surface {
    /// Classify from orientability and Euler characteristic.
    pub fn from_euler(orientable: bool, chi: i64) -> Self {
        if orientable {
            Self::Orientable { genus: 1 - chi / 2 }
        } else {
            Self::NonOrientable { crosscaps: 2 - chi }
        }
    }

    pub fn is_orientable(&self) -> bool {
        matches!(self, Self::Orientable { .. })
    }

    /// `+` for orientable surfaces, `-` otherwise.
    pub fn sign(&self) -> char {
        if self.is_orientable() {
            '+'
        } else {
            '-'
        }
    }

    /// Genus for orientable surfaces, cross-cap number otherwise.
    pub fn genus_like(&self) -> i64 {
        match *self {
            Self::Orientable { genus } => genus,
            Self::NonOrientable { crosscaps } => crosscaps,
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.genus_like(), self.sign())
    }
}

/// Count orbits of the group generated by two involutions, walking
/// `x -> second(first(x))` and marking both `x` and `first(x)`.
fn count_orbits(
    n: usize,
    first: impl Fn(usize) -> usize,
    second: impl Fn(usize) -> usize,
) -> usize {
    let mut seen = vec![false; n];
    let mut count = 0;
    for start in 0..n {
        if seen[start] {
            continue;
        }
        count += 1;
        let mut j = start;
        while !seen[j] {
            let f = first(j);
            seen[j] = true;
            seen[f] = true;
            j = second(f);
        }
    }
    count
}

impl FlagMap {
    /// Every flag is reachable from flag 0 through `angle`, `side` and resolved `end`.
    /// The empty map is not connected.
    pub fn is_connected(&self) -> bool {
        let n = self.len();
        if n == 0 {
            return false;
        }
        let mut seen = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        seen[0] = true;
        queue.push_back(0);
        let mut reached = 1;
        while let Some(x) = queue.pop_front() {
            for y in [Some(self.angle[x]), Some(self.side[x]), self.end[x]]
                .into_iter()
                .flatten()
            {
                if !seen[y] {
                    seen[y] = true;
                    reached += 1;
                    queue.push_back(y);
                }
            }
        }
        reached == n
    }

    /// Flags reachable from flag 0 through `side∘angle` and `side∘end`.
    ///
    /// These are the flags carrying the same local orientation as flag 0 (the
    /// positive side). On an orientable map exactly half the flags are positive
    /// and flag 1 = `angle(0)` is not; on a non-orientable map every flag is.
    pub fn side_coloring(&self) -> Vec<bool> {
        let n = self.len();
        let mut positive = vec![false; n];
        if n == 0 {
            return positive;
        }
        let mut queue = VecDeque::with_capacity(n);
        positive[0] = true;
        queue.push_back(0);
        while let Some(x) = queue.pop_front() {
            for y in [self.side[self.angle[x]], self.side[self.mate(x)]] {
                if !positive[y] {
                    positive[y] = true;
                    queue.push_back(y);
                }
            }
        }
        positive
    }

    pub fn is_orientable(&self) -> bool {
        !self.side_coloring().get(1).copied().unwrap_or(false)
    }

    pub fn vertex_count(&self) -> usize {
        count_orbits(self.len(), |x| self.angle[x], |x| self.side[x])
    }

    pub fn face_count(&self) -> usize {
        count_orbits(self.len(), |x| self.angle[x], |x| self.mate(x))
    }

    pub fn edge_count(&self) -> usize {
        self.len() / 4
    }

    /// `V - E + F`.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64
    }

    pub fn surface(&self) -> Surface {
        Surface::from_euler(self.is_orientable(), self.euler_characteristic())
    }
}
