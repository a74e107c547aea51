use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileAccessError { .. } => "FileAccessError",
            ErrorImpl::DecodingError => "DecodingError",
            ErrorImpl::OutputError { .. } => "OutputError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileAccessError { reason } => ErrorTip::Suggestion(format!(
                "{}, check that the file exists and is readable",
                reason
            )),
            ErrorImpl::DecodingError => {
                ErrorTip::Suggestion(String::from("input is not valid UTF-8 text"))
            }
            ErrorImpl::OutputError { reason } => ErrorTip::Suggestion(reason.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("cannot access input file: {reason}")]
    FileAccessError { reason: String },
    #[error("input file is not valid UTF-8")]
    DecodingError,
    #[error("failed to write report: {reason}")]
    OutputError { reason: String },
}
