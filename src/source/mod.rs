//! Line source for the word counter.
//!
//! Reads the input file lazily, one line at a time, so memory use is
//! bounded by the longest line rather than the size of the file.

pub mod lines;
