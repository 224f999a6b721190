//! Core library for producing resolved compiler flag sets consumed by
//! ycmd-style semantic completion engines.
//!
//! The crate exposes the flag resolution logic, the completion configuration
//! record handed back to the host, and configuration types that power both
//! the binary and tests.

use serde::{Deserialize, Serialize};

pub mod config;
pub use config::Config;
pub mod error;
pub use error::YcmFlagsError;

/// Completion configuration record returned to the hosting completion
/// engine. Field names are fixed by the host contract.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CompletionConfig {
    pub flags: Vec<String>,
    pub do_cache: bool,
}

/// Flag resolution logic - pure functions that can be easily tested
pub mod resolver {
    use super::*;
    use crate::config::PATH_FLAGS;
    use indexmap::IndexMap;
    use log::debug;
    use serde_json::Value;
    use std::env;
    use std::path::{Path, PathBuf};

    /// Returns the directory containing the running executable. This is the
    /// default anchor for relative include paths, mirroring configurations
    /// that resolve paths against their own location.
    pub fn directory_of_this_binary() -> Result<PathBuf, YcmFlagsError> {
        let exe = env::current_exe()
            .map_err(|source| YcmFlagsError::ExecutableLocation { source })?;

        match exe.parent() {
            Some(parent) => Ok(parent.to_path_buf()),
            None => Err(YcmFlagsError::MissingParent { path: exe }),
        }
    }

    /// Joins `value` onto `working_directory`. An absolute `value` discards
    /// the working directory entirely, so already-anchored paths survive
    /// resolution untouched.
    fn join_to_string(working_directory: &Path, value: &str) -> String {
        working_directory.join(value).display().to_string()
    }

    /// Rewrites every relative path-bearing flag in `flags` to an absolute
    /// path anchored at `working_directory`, preserving order and duplicates.
    ///
    /// The walk tracks a single piece of state: whether the previous flag was
    /// a path-introducing token (`-isystem`, `-I`, `-iquote`, `--sysroot=`)
    /// that takes its path as the next separate token. Concatenated forms
    /// such as `-Irel/include` or `--sysroot=rel` are rewritten in place.
    /// Matching is first-match-wins in the declared token order and at most
    /// one rule applies per flag. Unrecognized flags pass through unchanged,
    /// and an empty `working_directory` yields a plain copy of the input.
    pub fn make_relative_paths_absolute(
        flags: &[String],
        working_directory: &Path,
    ) -> Vec<String> {
        if working_directory.as_os_str().is_empty() {
            return flags.to_vec();
        }

        let mut new_flags = Vec::with_capacity(flags.len());
        let mut make_next_absolute = false;

        for flag in flags {
            let mut new_flag = flag.clone();

            if make_next_absolute {
                make_next_absolute = false;
                if !Path::new(flag).is_absolute() {
                    new_flag = join_to_string(working_directory, flag);
                }
            }

            for path_flag in PATH_FLAGS {
                if flag == path_flag {
                    make_next_absolute = true;
                    break;
                }

                if let Some(path) = flag.strip_prefix(path_flag) {
                    new_flag = format!(
                        "{path_flag}{}",
                        join_to_string(working_directory, path)
                    );
                    break;
                }
            }

            // A flag that rewrites to nothing is dropped rather than
            // forwarded to the completion engine.
            if !new_flag.is_empty() {
                new_flags.push(new_flag);
            }
        }

        new_flags
    }

    /// Resolves the configured base flags against `working_directory` and
    /// packages them up for the completion engine. `filename` and `options`
    /// are part of the host contract but do not influence the result; the
    /// flag set is identical for every file.
    pub fn flags_for_file_in(
        filename: &Path,
        options: &IndexMap<String, Value>,
        config: &Config,
        working_directory: &Path,
    ) -> CompletionConfig {
        debug!(
            "flags requested for {:?} ({} option(s) ignored)",
            filename,
            options.len()
        );

        CompletionConfig {
            flags: make_relative_paths_absolute(
                &config.base_flags,
                working_directory,
            ),
            do_cache: config.do_cache,
        }
    }

    /// Sole entry point invoked by the hosting completion engine: resolves
    /// the default base flags against the directory containing this
    /// executable.
    pub fn flags_for_file(
        filename: &Path,
        options: &IndexMap<String, Value>,
    ) -> Result<CompletionConfig, YcmFlagsError> {
        let working_directory = directory_of_this_binary()?;
        Ok(flags_for_file_in(
            filename,
            options,
            &Config::default(),
            &working_directory,
        ))
    }
}
