// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use magic_ring_search::RingReport;

/// Parse an `a,b,c; d,e,f; ...` description back into its lines.
pub fn parse_description(description: &str) -> Vec<[u64; 3]> {
    description
        .split("; ")
        .map(|line| {
            let values: Vec<u64> = line
                .split(',')
                .map(|value| value.parse().expect("label is a number"))
                .collect();
            assert_eq!(values.len(), 3, "line {:?} is not a triple", line);
            [values[0], values[1], values[2]]
        })
        .collect()
}

/// Check the properties every reported solution must have.
///
/// - each line has the same sum
/// - the first external node is the smallest
/// - the labels are exactly 1..=2n, each internal node shared by two lines
/// - no description is repeated, and they are sorted descending
pub fn assert_valid_report(report: &RingReport) {
    let n = report.size().n();
    let descriptions = report.descriptions();

    for description in &descriptions {
        let lines = parse_description(description);
        assert_eq!(lines.len(), n, "{}", description);

        let total = lines[0].iter().sum::<u64>();
        for line in &lines {
            assert_eq!(line.iter().sum::<u64>(), total, "{}", description);
        }

        let externals: Vec<u64> = lines.iter().map(|line| line[0]).collect();
        assert_eq!(
            Some(&externals[0]),
            externals.iter().min(),
            "{} is not in canonical rotation",
            description
        );

        // Line i ends where line i + 1 continues
        for i in 0..n {
            assert_eq!(lines[i][2], lines[(i + 1) % n][1], "{}", description);
        }

        let mut labels: Vec<u64> = externals.clone();
        labels.extend(lines.iter().map(|line| line[1]));
        labels.sort_unstable();
        let expected: Vec<u64> = (1..=2 * n as u64).collect();
        assert_eq!(labels, expected, "{}", description);
    }

    let unique: HashSet<&String> = descriptions.iter().collect();
    assert_eq!(unique.len(), descriptions.len(), "duplicate descriptions");

    for pair in descriptions.windows(2) {
        assert!(pair[0] > pair[1], "{:?} not in descending order", pair);
    }
}

/// Concatenate the digits of a description, as the report's maximum does.
pub fn concatenate(description: &str) -> u64 {
    description
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .expect("concatenation fits in u64")
}
