//! Degree multiset: the bag of vertex degrees still waiting to be placed.
//!
//! Counts live in an ordered map keyed by degree, together with a cached total
//! so that the generator can ask "anything left?" and "which degrees?" without
//! scanning. Mutation follows the same push/pop discipline as the flag map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Error raised while parsing a degree token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DegreeError {
    NotAnInteger { token: String },
    NonPositive { token: String },
}

impl fmt::Display for DegreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger { token } => write!(f, "can't parse degree {token:?}"),
            Self::NonPositive { token } => write!(f, "degree must be positive, got {token}"),
        }
    }
}

impl std::error::Error for DegreeError {}

/// Parse one degree token (a positive integer).
pub fn parse_degree(token: &str) -> Result<usize, DegreeError> {
    let value: i64 = token
        .trim()
        .parse()
        .map_err(|_| DegreeError::NotAnInteger {
            token: token.to_string(),
        })?;
    if value <= 0 {
        return Err(DegreeError::NonPositive {
            token: token.to_string(),
        });
    }
    usize::try_from(value).map_err(|_| DegreeError::NotAnInteger {
        token: token.to_string(),
    })
}

/// Multiset of positive vertex degrees.
///
/// Invariants:
/// - every stored count is positive (a degree whose count drops to zero is removed);
/// - `total == counts.values().sum()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeMultiset {
    counts: BTreeMap<usize, usize>,
    total: usize,
}

impl DegreeMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a sequence of degree tokens, one per vertex.
    pub fn parse<I, S>(tokens: I) -> Result<Self, DegreeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut res = Self::new();
        for token in tokens {
            res.add(parse_degree(token.as_ref())?);
        }
        Ok(res)
    }

    pub fn add(&mut self, value: usize) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remove one copy of `value`.
    ///
    /// Panics if `value` is not present: the search only removes what it
    /// previously saw in `distinct_values`.
    pub fn remove(&mut self, value: usize) {
        match self.counts.get(&value).copied() {
            Some(1) => {
                self.counts.remove(&value);
            }
            Some(c) => {
                self.counts.insert(value, c - 1);
            }
            None => panic!("nonexistent degree {value} in {self}"),
        }
        self.total -= 1;
    }

    /// Degrees with positive multiplicity, ascending.
    pub fn distinct_values(&self) -> Vec<usize> {
        self.counts.keys().copied().collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.total
    }

    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, value: usize) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Sum of all degrees; twice the edge count of any map built from them.
    pub fn degree_sum(&self) -> usize {
        self.counts.iter().map(|(d, c)| d * c).sum()
    }

    /// Flat ascending listing, one entry per vertex.
    pub fn to_vec(&self) -> Vec<usize> {
        self.counts
            .iter()
            .flat_map(|(&d, &c)| std::iter::repeat(d).take(c))
            .collect()
    }
}

impl FromIterator<usize> for DegreeMultiset {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut res = Self::new();
        for d in iter {
            res.add(d);
        }
        res
    }
}

impl FromStr for DegreeMultiset {
    type Err = DegreeError;

    /// Whitespace- or comma-separated degrees, e.g. `"3 3"` or `"3,3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(
            s.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty()),
        )
    }
}

impl fmt::Display for DegreeMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_vec())
    }
}
