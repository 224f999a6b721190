//! Error types used throughout the ycmflags library and binary.
//!
//! The flag resolution walk itself is total: malformed flags pass through
//! unchanged rather than raising faults. Errors only surface at the ambient
//! edges, such as locating the running executable to determine the default
//! working directory.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Structured error value covering the fallible edges of flag resolution.
#[derive(Debug, Error)]
pub enum YcmFlagsError {
    #[error("failed to locate the running executable: {source}")]
    ExecutableLocation {
        #[source]
        source: io::Error,
    },
    #[error("executable path {path:?} is missing a parent directory")]
    MissingParent { path: PathBuf },
}
