// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lines of a magic ring.
//!
//! Each external node starts one line, which continues through the internal
//! node beside it and then the next internal node clockwise. For the i-th
//! external node of an n-gon the positions are `(i, n + i, n + (i + 1) % n)`.

use std::fmt;

/// Three ring positions whose labels must add up to the magic total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    positions: [usize; 3],
}

impl Line {
    /// The line starting at external node `index` of an `n`-gon.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n`.
    pub fn new(n: usize, index: usize) -> Self {
        assert!(index < n, "Line index {} out of range for {}-gon", index, n);
        Self {
            positions: [index, n + index, n + (index + 1) % n],
        }
    }

    /// Ring positions in line order: external, then the two internal nodes.
    pub fn positions(&self) -> [usize; 3] {
        self.positions
    }

    /// The position of the external node.
    pub fn external(&self) -> usize {
        self.positions[0]
    }

    /// Read the labels of this line from a ring.
    pub fn values(&self, ring: &[u64]) -> [u64; 3] {
        self.positions.map(|position| ring[position])
    }

    /// Sum of the labels of this line.
    pub fn sum(&self, ring: &[u64]) -> u64 {
        self.values(ring).iter().sum()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.positions;
        write!(f, "({}, {}, {})", a, b, c)
    }
}
