use std::{fmt, path::Path};

/// Failure to obtain recipe text at all. Parsing itself never fails; this
/// covers the file system and decoding steps before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}
