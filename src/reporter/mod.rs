//! Plain text frequency report.
//!
//! One `word: count` line per distinct word, in ascending word order, with
//! no header and no summary.

pub mod reporter;
