//! Lexical analysis module for the word counter.
//!
//! This module contains the tokenizer that turns a line of text into
//! lower-cased word tokens. It handles:
//!
//! - Matching maximal runs of word characters (letters, digits, underscore)
//! - Case folding so `Hello`, `HELLO` and `hello` are the same word

pub mod lexer;
pub mod tokens;
