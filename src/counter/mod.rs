//! Word frequency counting.

pub mod counter;
