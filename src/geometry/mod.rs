// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for magic rings.
//!
//! - RingSize: the validated number of sides n (3..=5)
//! - Line: a triple of ring positions that must share the magic total
//!
//! A ring is stored as 2n labels: positions 0..n are the external nodes in
//! clockwise order, positions n..2n the internal nodes.

pub mod constants;
pub mod line;
pub mod ring_size;

pub use constants::*;
pub use line::Line;
pub use ring_size::RingSize;
