//! Lexical path helpers for import resolution
//!
//! Reference paths in component metadata are resolved without touching the
//! filesystem: import provenance is decided purely from the text of the
//! reference and the location of the referencing file.

use std::path::{Component, Path, PathBuf};

/// True when a reference path is written relative to the referencing file
pub fn is_relative_reference(path: &str) -> bool {
    path.starts_with('.')
}

/// Resolve a reference path against the file containing the reference.
///
/// Relative paths are joined to the file's parent directory and normalized;
/// absolute paths pass through unchanged.
pub fn resolve_from_file(referencing_file: &Path, reference: &str) -> PathBuf {
    if !is_relative_reference(reference) {
        return PathBuf::from(reference);
    }

    let base = referencing_file.parent().unwrap_or_else(|| Path::new(""));
    normalize(&base.join(reference))
}

/// Lexically collapse `.` and `..` segments
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root of an absolute path has nowhere to go
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir.as_os_str()),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}
