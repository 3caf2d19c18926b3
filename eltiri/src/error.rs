//! Extraction errors.

use alloc::string::String;
use core::fmt::{self, Display};

/// Failure to extract a single declaration.
///
/// Such failures are logged and the declaration is dropped;
/// they never abort the export of the remaining library.
#[derive(Debug)]
pub enum Error {
    /// The host failed to render an expression.
    Pp(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pp(e) => write!(f, "pretty printer failed: {}", e),
        }
    }
}
