//! Error types and error handling for the word counter.
//!
//! This module defines the errors that can abort a run:
//!
//! - Error structures carrying the offending file and line
//! - Specific error variants for opening, decoding and writing
//! - Error names and tips used by the command line diagnostics

pub mod errors;
