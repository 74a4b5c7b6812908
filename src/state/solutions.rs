// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Accepted solutions.
//!
//! A solution is kept as its lines of labels, in line order. Everything the
//! search reports (description, concatenation, magic total) is derived from
//! those lines.

use std::fmt;

use crate::geometry::Line;

/// A magic ring that passed every filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    lines: Vec<[u64; 3]>,
}

impl Solution {
    /// Read a solution off a complete ring.
    pub fn from_ring(ring: &[u64], lines: &[Line]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.values(ring)).collect(),
        }
    }

    /// The labels of each line: external node first, then the two internal nodes.
    pub fn lines(&self) -> &[[u64; 3]] {
        &self.lines
    }

    /// The external node of each line, clockwise.
    pub fn external_nodes(&self) -> Vec<u64> {
        self.lines.iter().map(|line| line[0]).collect()
    }

    /// Sum of each line.
    pub fn line_sums(&self) -> Vec<u64> {
        self.lines.iter().map(|line| line.iter().sum()).collect()
    }

    /// The common line sum, or `None` if the lines disagree.
    pub fn magic_total(&self) -> Option<u64> {
        let sums = self.line_sums();
        let first = *sums.first()?;
        sums.iter().all(|&sum| sum == first).then_some(first)
    }

    /// The `a,b,c; d,e,f; ...` description.
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Every label's decimal digits concatenated in line order, as a number.
    pub fn concatenation(&self) -> u64 {
        self.lines
            .iter()
            .flatten()
            .fold(0, |acc, &label| acc * 10u64.pow(decimal_digits(label)) + label)
    }

    /// Number of digits in the concatenation.
    pub fn digit_count(&self) -> u32 {
        self.lines.iter().flatten().map(|&label| decimal_digits(label)).sum()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, [a, b, c]) in self.lines.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{},{},{}", a, b, c)?;
        }
        Ok(())
    }
}

fn decimal_digits(label: u64) -> u32 {
    label.checked_ilog10().unwrap_or(0) + 1
}

/// Solutions accepted so far, with the running maximum concatenation.
#[derive(Debug, Default)]
pub struct SolutionLog {
    solutions: Vec<Solution>,
    maximum: u64,
}

impl SolutionLog {
    pub fn new() -> Self {
        SolutionLog::default()
    }

    /// Append a solution and update the maximum.
    pub fn record(&mut self, solution: Solution) {
        self.maximum = self.maximum.max(solution.concatenation());
        self.solutions.push(solution);
    }

    /// Solutions in the order they were found.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Consume the log, keeping the solutions in the order they were found.
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }

    /// Largest concatenation recorded; 0 when there are none.
    pub fn maximum(&self) -> u64 {
        self.maximum
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RingSize;

    fn triangle(ring: [u64; 6]) -> Solution {
        let size = RingSize::try_from(3).unwrap();
        Solution::from_ring(&ring, &size.lines())
    }

    #[test]
    fn test_from_ring() {
        let solution = triangle([4, 6, 5, 3, 2, 1]);
        assert_eq!(solution.lines(), &[[4, 3, 2], [6, 2, 1], [5, 1, 3]]);
        assert_eq!(solution.external_nodes(), vec![4, 6, 5]);
        assert_eq!(solution.magic_total(), Some(9));
    }

    #[test]
    fn test_description_and_concatenation() {
        let solution = triangle([4, 6, 5, 3, 2, 1]);
        assert_eq!(solution.description(), "4,3,2; 6,2,1; 5,1,3");
        assert_eq!(solution.concatenation(), 432_621_513);
        assert_eq!(solution.digit_count(), 9);
    }

    #[test]
    fn test_unequal_lines_have_no_total() {
        let solution = triangle([1, 2, 3, 4, 5, 6]);
        assert_eq!(solution.line_sums(), vec![10, 13, 13]);
        assert_eq!(solution.magic_total(), None);
    }

    #[test]
    fn test_two_digit_label() {
        let size = RingSize::try_from(5).unwrap();
        let ring = [6, 10, 9, 8, 7, 5, 3, 1, 4, 2];
        let solution = Solution::from_ring(&ring, &size.lines());
        assert_eq!(solution.description(), "6,5,3; 10,3,1; 9,1,4; 8,4,2; 7,2,5");
        assert_eq!(solution.concatenation(), 6_531_031_914_842_725);
        assert_eq!(solution.digit_count(), 16);
        assert_eq!(solution.magic_total(), Some(14));
    }

    #[test]
    fn test_log_tracks_maximum() {
        let mut log = SolutionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.maximum(), 0);

        log.record(triangle([4, 5, 6, 2, 3, 1]));
        log.record(triangle([4, 6, 5, 3, 2, 1]));
        log.record(triangle([1, 3, 5, 6, 4, 2]));
        assert_eq!(log.len(), 3);
        assert_eq!(log.maximum(), 432_621_513);
    }
}
