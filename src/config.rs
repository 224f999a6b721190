//! Shared configuration definitions used by both the library and the binary.

/// Base compiler flags handed to the completion engine, prior to path
/// resolution. Two-token include flags keep their path as a separate entry.
pub const DEFAULT_BASE_FLAGS: &[&str] = &[
    "-Wall",
    "-Wextra",
    "-Werror",
    "-std=c++11",
    "-I",
    ".",
    "-I",
    "/usr/include/eigen3",
];

/// Tokens that associate a filesystem path with a flag, either as the next
/// separate argument or as a concatenated suffix. Match order matters: the
/// resolver applies the first rule that fires.
pub const PATH_FLAGS: &[&str] = &["-isystem", "-I", "-iquote", "--sysroot="];

/// Default caching hint returned to the completion engine.
pub const DEFAULT_DO_CACHE: bool = true;

/// Configuration for the ycmflags tool.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_flags: Vec<String>,
    pub do_cache: bool,
}

impl Default for Config {
    /// Provides defaults that mirror the declared constants so tests and
    /// library consumers share the same baseline.
    fn default() -> Self {
        Self {
            base_flags: default_base_flags(),
            do_cache: DEFAULT_DO_CACHE,
        }
    }
}

impl Config {
    /// Returns the default base flags as owned strings.
    pub fn default_base_flags() -> Vec<String> {
        default_base_flags()
    }
}

fn default_base_flags() -> Vec<String> {
    DEFAULT_BASE_FLAGS
        .iter()
        .map(|entry| (*entry).to_string())
        .collect()
}
