//! Equivalence selector and search counters.

use std::fmt;

/// Which relabelings identify two maps before output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equivalence {
    /// Every labeled map, no collapsing.
    #[default]
    Labeled,
    /// Collapse under orientation-preserving relabelings.
    Sensed,
    /// Collapse under all relabelings.
    Unsensed,
}

/// Both `sensed` and `unsensed` were requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorConflict;

impl fmt::Display for SelectorConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("can't have both sensed and unsensed selectors set")
    }
}

impl std::error::Error for SelectorConflict {}

impl Equivalence {
    /// Resolve the two mutually exclusive selector flags.
    pub fn from_selectors(sensed: bool, unsensed: bool) -> Result<Self, SelectorConflict> {
        match (sensed, unsensed) {
            (true, true) => Err(SelectorConflict),
            (true, false) => Ok(Self::Sensed),
            (false, true) => Ok(Self::Unsensed),
            (false, false) => Ok(Self::Labeled),
        }
    }

    /// Whether maps are collapsed to isomorphism classes at all.
    pub fn collapses(&self) -> bool {
        !matches!(self, Self::Labeled)
    }

    /// Whether only orientation-preserving relabelings are allowed.
    pub fn orientation_only(&self) -> bool {
        matches!(self, Self::Sensed)
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Labeled => "labeled",
            Self::Sensed => "sensed",
            Self::Unsensed => "unsensed",
        };
        f.write_str(name)
    }
}

/// Counters collected by one exhaustive search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls of the flag cursor.
    pub nodes: u64,
    /// Complete configurations reached (all flags joined, no degree left).
    pub leaves: u64,
    /// Complete configurations rejected as disconnected.
    pub disconnected: u64,
    /// Connected maps handed to the consumer.
    pub emitted: u64,
}
