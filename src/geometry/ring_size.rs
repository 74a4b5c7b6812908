// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated ring size.

use std::fmt;
use std::str::FromStr;

use super::constants::{factorial, MAX_SIDES, MIN_SIDES};
use super::Line;
use crate::error::RingError;

/// The number of sides n of a magic n-gon ring, known to be in [3, 5].
///
/// All entry points validate n by building a `RingSize`, so the search
/// never sees an unsupported size.
///
/// # Example
///
/// ```
/// use magic_ring_search::geometry::RingSize;
///
/// let size: RingSize = "5".parse().unwrap();
/// assert_eq!(size.node_count(), 10);
/// assert!(size.requires_ten_outside());
/// assert!(RingSize::try_from(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingSize(usize);

impl RingSize {
    /// All supported sizes, smallest first.
    pub fn all() -> impl Iterator<Item = RingSize> {
        (MIN_SIDES..=MAX_SIDES).map(RingSize)
    }

    /// The number of sides n.
    pub fn n(self) -> usize {
        self.0
    }

    /// Number of nodes, and of labels 1..=2n.
    pub fn node_count(self) -> usize {
        2 * self.0
    }

    /// The n lines in clockwise order, starting at external node 0.
    pub fn lines(self) -> Vec<Line> {
        (0..self.0).map(|index| Line::new(self.0, index)).collect()
    }

    /// Whether label 10 must be an external node (the 16-digit 5-gon case).
    pub fn requires_ten_outside(self) -> bool {
        self.0 == MAX_SIDES
    }

    /// Number of candidate rings, (2n)!.
    pub fn candidate_count(self) -> u64 {
        factorial(self.node_count()) as u64
    }
}

impl TryFrom<i64> for RingSize {
    type Error = RingError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match usize::try_from(n) {
            Ok(sides) if (MIN_SIDES..=MAX_SIDES).contains(&sides) => Ok(RingSize(sides)),
            _ => Err(RingError::invalid(n)),
        }
    }
}

impl FromStr for RingSize {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s.trim().parse().map_err(|_| RingError::invalid(s.trim()))?;
        RingSize::try_from(n)
    }
}

impl fmt::Display for RingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-gon", self.0)
    }
}
