//! Flag map storage and the four stack-discipline mutations.
//!
//! Flags of one vertex of degree `d` occupy a contiguous block of `2d` indices.
//! `angle` pairs `(2k, 2k+1)` inside the block, `side` pairs the remaining
//! neighbours cyclically, and `end` stays unresolved until an edge is joined.

use std::fmt;

/// A combinatorial map as three fixed-point-free involutions on flags.
///
/// Invariants:
/// - `angle.len() == side.len() == end.len()`.
/// - `angle` and `side` are total involutions without fixed points.
/// - `end[x] == Some(y)` iff `end[y] == Some(x)`; `None` marks an unpaired flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlagMap {
    pub(crate) angle: Vec<usize>,
    pub(crate) side: Vec<usize>,
    pub(crate) end: Vec<Option<usize>>,
}

/// Which of the three involutions an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Involution {
    Angle,
    Side,
    End,
}

impl fmt::Display for Involution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Angle => "angle",
            Self::Side => "side",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// Rejection reasons for maps assembled from raw arrays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    LengthMismatch { angle: usize, side: usize, end: usize },
    FlagCount { flags: usize },
    OutOfRange { involution: Involution, flag: usize, image: usize },
    FixedPoint { involution: Involution, flag: usize },
    NotInvolution { involution: Involution, flag: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { angle, side, end } => write!(
                f,
                "involution lengths differ: angle={angle} side={side} end={end}"
            ),
            Self::FlagCount { flags } => {
                write!(f, "flag count {flags} is not a positive multiple of 4")
            }
            Self::OutOfRange {
                involution,
                flag,
                image,
            } => write!(f, "{involution}[{flag}] = {image} is out of range"),
            Self::FixedPoint { involution, flag } => {
                write!(f, "{involution} fixes flag {flag}")
            }
            Self::NotInvolution { involution, flag } => {
                write!(f, "{involution} is not an involution at flag {flag}")
            }
        }
    }
}

impl std::error::Error for MapError {}

fn check_involution(involution: Involution, p: &[usize]) -> Result<(), MapError> {
    let n = p.len();
    for (flag, &image) in p.iter().enumerate() {
        if image >= n {
            return Err(MapError::OutOfRange {
                involution,
                flag,
                image,
            });
        }
        if image == flag {
            return Err(MapError::FixedPoint { involution, flag });
        }
        if p[image] != flag {
            return Err(MapError::NotInvolution { involution, flag });
        }
    }
    Ok(())
}

impl FlagMap {
    /// Empty map with no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a complete map from raw involution arrays.
    pub fn from_involutions(
        angle: Vec<usize>,
        side: Vec<usize>,
        end: Vec<usize>,
    ) -> Result<Self, MapError> {
        if angle.len() != side.len() || angle.len() != end.len() {
            return Err(MapError::LengthMismatch {
                angle: angle.len(),
                side: side.len(),
                end: end.len(),
            });
        }
        if angle.is_empty() || angle.len() % 4 != 0 {
            return Err(MapError::FlagCount { flags: angle.len() });
        }
        check_involution(Involution::Angle, &angle)?;
        check_involution(Involution::Side, &side)?;
        check_involution(Involution::End, &end)?;
        Ok(Self {
            angle,
            side,
            end: end.into_iter().map(Some).collect(),
        })
    }

    /// Number of flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.angle.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angle.is_empty()
    }

    #[inline]
    pub fn angle(&self, x: usize) -> usize {
        self.angle[x]
    }

    #[inline]
    pub fn side(&self, x: usize) -> usize {
        self.side[x]
    }

    /// Partner across the edge, if already joined.
    #[inline]
    pub fn end(&self, x: usize) -> Option<usize> {
        self.end[x]
    }

    pub fn angles(&self) -> &[usize] {
        &self.angle
    }

    pub fn sides(&self) -> &[usize] {
        &self.side
    }

    pub fn ends(&self) -> &[Option<usize>] {
        &self.end
    }

    /// Every flag has an `end` partner.
    pub fn is_complete(&self) -> bool {
        self.end.iter().all(Option::is_some)
    }

    /// `end` image for queries that are only meaningful on complete maps.
    #[inline]
    pub(crate) fn mate(&self, x: usize) -> usize {
        match self.end[x] {
            Some(y) => y,
            None => panic!("flag {x} has no end partner; map is incomplete"),
        }
    }

    /// Append a vertex of degree `d` (`2d` new flags, `end` unresolved).
    pub fn add_vertex(&mut self, d: usize) {
        assert!(d >= 1, "vertex degree must be positive");
        let n = self.len();
        let m = n + 2 * d;
        self.end.resize(m, None);

        self.side.push(m - 1);
        let mut i = n + 1;
        while i + 2 < m {
            self.side.push(i + 1);
            self.side.push(i);
            i += 2;
        }
        self.side.push(n);

        for i in (n..m).step_by(2) {
            self.angle.push(i + 1);
            self.angle.push(i);
        }
    }

    /// Remove the most recently added vertex of degree `d`.
    ///
    /// Only valid as the inverse of `add_vertex(d)`; the removed flags must be unjoined.
    pub fn del_vertex(&mut self, d: usize) {
        let n = self.len();
        assert!(2 * d <= n, "cannot remove degree {d} vertex from {n} flags");
        let keep = n - 2 * d;
        if let Some(x) = (keep..n).find(|&x| self.end[x].is_some()) {
            panic!("removing vertex while flag {x} is still joined");
        }
        self.angle.truncate(keep);
        self.side.truncate(keep);
        self.end.truncate(keep);
    }

    /// Join flags `x` and `y` into one edge; their `side` mirrors are joined too.
    pub fn add_edge(&mut self, x: usize, y: usize) {
        let (sx, sy) = (self.side[x], self.side[y]);
        for f in [x, y, sx, sy] {
            assert!(self.end[f].is_none(), "flag {f} is already joined");
        }
        self.end[x] = Some(y);
        self.end[y] = Some(x);
        self.end[sx] = Some(sy);
        self.end[sy] = Some(sx);
    }

    /// Undo `add_edge(x, y)`.
    pub fn del_edge(&mut self, x: usize, y: usize) {
        let (sx, sy) = (self.side[x], self.side[y]);
        assert!(
            self.end[x] == Some(y) && self.end[sx] == Some(sy),
            "flags {x} and {y} are not joined"
        );
        self.end[x] = None;
        self.end[y] = None;
        self.end[sx] = None;
        self.end[sy] = None;
    }
}

fn write_array<I>(f: &mut fmt::Formatter<'_>, tag: char, items: I) -> fmt::Result
where
    I: IntoIterator<Item = Option<usize>>,
{
    write!(f, "{tag}[")?;
    for (k, item) in items.into_iter().enumerate() {
        if k > 0 {
            f.write_str(" ")?;
        }
        match item {
            Some(v) => write!(f, "{v}")?,
            None => f.write_str("-")?,
        }
    }
    f.write_str("]")
}

impl fmt::Display for FlagMap {
    /// `a[..] s[..] e[..]`; unresolved `end` entries print as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, 'a', self.angle.iter().copied().map(Some))?;
        f.write_str(" ")?;
        write_array(f, 's', self.side.iter().copied().map(Some))?;
        f.write_str(" ")?;
        write_array(f, 'e', self.end.iter().copied())
    }
}
