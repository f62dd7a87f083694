//! Per-item diagnostics collected during a run.
//!
//! Recoverable failures (one file, one message site) are accumulated into
//! these types instead of aborting the run; only boundary failures (bad
//! source root, failed final write) surface as hard errors.

use std::fmt;

/// Why a candidate message site was dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteWarningReason {
    /// The message argument had an expression shape with no static text.
    UnsupportedShape { shape: &'static str },
    /// The configured key-argument index points outside the argument list.
    KeyArgumentOutOfBounds { index: isize, argument_count: usize },
}

/// A non-fatal, per-site extraction warning. The site is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteWarning {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub reason: SiteWarningReason,
}

impl fmt::Display for SiteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: ", self.file, self.line, self.column)?;
        match &self.reason {
            SiteWarningReason::UnsupportedShape { shape } => {
                write!(f, "cannot read message from {}, site dropped", shape)
            }
            SiteWarningReason::KeyArgumentOutOfBounds {
                index,
                argument_count,
            } => write!(
                f,
                "message argument index {} is out of bounds for {} argument(s), site dropped",
                index, argument_count
            ),
        }
    }
}

/// A source file that could not be read or parsed. The file is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file: String,
    pub error: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.error)
    }
}
