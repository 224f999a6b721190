//! High-level integration tests exercising flag resolution against real
//! filesystem locations.

use indexmap::IndexMap;
use std::path::Path;
use tempfile::TempDir;
use ycmflags::{Config, resolver};

/// Walks the default base flags through resolution against a real directory
/// and checks every category of flag lands where expected.
#[test]
fn test_default_flags_resolve_against_directory() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let working_directory = temp_dir.path();

    let config = Config::default();
    let resolved = resolver::make_relative_paths_absolute(
        &config.base_flags,
        working_directory,
    );

    let expected = vec![
        "-Wall".to_string(),
        "-Wextra".to_string(),
        "-Werror".to_string(),
        "-std=c++11".to_string(),
        "-I".to_string(),
        working_directory.join(".").display().to_string(),
        "-I".to_string(),
        "/usr/include/eigen3".to_string(),
    ];

    assert_eq!(resolved, expected);
}

/// Mixed flag lists resolve each path-bearing form independently while
/// preserving order.
#[test]
fn test_mixed_flag_list_resolution() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let working_directory = temp_dir.path();

    let input: Vec<String> = [
        "-Wall",
        "-iquote",
        "detail",
        "--sysroot=toolchain",
        "-isystem",
        "/opt/vendor/include",
        "-DNDEBUG",
    ]
    .iter()
    .map(|value| (*value).to_string())
    .collect();

    let resolved =
        resolver::make_relative_paths_absolute(&input, working_directory);

    assert_eq!(resolved.len(), input.len());
    assert_eq!(resolved[0], "-Wall");
    assert_eq!(resolved[1], "-iquote");
    assert_eq!(
        resolved[2],
        working_directory.join("detail").display().to_string()
    );
    assert_eq!(
        resolved[3],
        format!(
            "--sysroot={}",
            working_directory.join("toolchain").display()
        )
    );
    assert_eq!(resolved[4], "-isystem");
    assert_eq!(resolved[5], "/opt/vendor/include");
    assert_eq!(resolved[6], "-DNDEBUG");
}

/// The contract entry point anchors the default flags at the directory
/// containing the running binary and always advises caching.
#[test]
fn test_flags_for_file_uses_binary_directory() {
    let options = IndexMap::new();

    let completion =
        resolver::flags_for_file(Path::new("main.cpp"), &options)
            .expect("resolve flags");

    assert!(completion.do_cache);
    assert_eq!(completion.flags.len(), Config::default().base_flags.len());

    let binary_dir =
        resolver::directory_of_this_binary().expect("locate test binary");
    let anchored = binary_dir.join(".").display().to_string();
    assert!(completion.flags.contains(&anchored));

    // The absolute system include survives untouched.
    assert!(
        completion
            .flags
            .contains(&"/usr/include/eigen3".to_string())
    );
}

/// Two invocations for different files produce identical configurations.
#[test]
fn test_flags_for_file_is_file_independent() {
    let options = IndexMap::new();

    let first = resolver::flags_for_file(Path::new("a.cpp"), &options)
        .expect("resolve flags");
    let second =
        resolver::flags_for_file(Path::new("deep/nested/b.cc"), &options)
            .expect("resolve flags");

    assert_eq!(first, second);
}

/// Options content never influences the resolved flag set.
#[test]
fn test_options_are_ignored() {
    let empty = IndexMap::new();
    let mut populated = IndexMap::new();
    populated.insert(
        "language".to_string(),
        serde_json::Value::String("cpp".to_string()),
    );
    populated.insert("flags_ready".to_string(), serde_json::Value::Bool(true));

    let temp_dir = TempDir::new().expect("create temp dir");
    let config = Config::default();

    let without = resolver::flags_for_file_in(
        Path::new("main.cpp"),
        &empty,
        &config,
        temp_dir.path(),
    );
    let with = resolver::flags_for_file_in(
        Path::new("main.cpp"),
        &populated,
        &config,
        temp_dir.path(),
    );

    assert_eq!(without, with);
}
