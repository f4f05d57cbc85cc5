// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers.
//!
//! ```text
//! find_build_file(dir)   *.sln, else *.csproj / *.vbproj (depth 1)
//! write_atomic(path, s)  NamedTempFile in target dir --> persist
//! ```

use std::io::Write as _;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::FsError;

/// Solution file extension, preferred over project files.
const SOLUTION_EXTENSION: &str = "sln";

/// Project file extensions accepted when no solution exists.
const PROJECT_EXTENSIONS: &[&str] = &["csproj", "vbproj"];

/// Finds the single build file directly inside `dir`.
///
/// A solution wins over project files. Hidden and ignored entries are
/// skipped the same way `git` would skip them.
///
/// # Errors
///
/// Returns `FsError::NotFound` when nothing matches and
/// `FsError::AmbiguousBuildFile` when more than one file of the winning kind
/// exists.
pub fn find_build_file(dir: &Path) -> Result<PathBuf, FsError> {
    let mut solutions = Vec::new();
    let mut projects = Vec::new();

    for entry in WalkBuilder::new(dir).max_depth(Some(1)).build().flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(SOLUTION_EXTENSION) => solutions.push(path),
            Some(ext) if PROJECT_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)) => {
                projects.push(path);
            }
            _ => {}
        }
    }

    let mut candidates = if solutions.is_empty() {
        projects
    } else {
        solutions
    };
    candidates.sort();
    debug!(dir = %dir.display(), candidates = ?candidates, "build file candidates");

    match candidates.len() {
        0 => Err(FsError::NotFound(format!(
            "no .sln, .csproj or .vbproj file in {}",
            dir.display()
        ))),
        1 => Ok(candidates.remove(0)),
        _ => Err(FsError::AmbiguousBuildFile {
            dir: dir.display().to_string(),
            candidates: candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// Writes `contents` to `path` through a temporary file in the same directory.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns `FsError::IoError` if the directory cannot be created or the file
/// cannot be written or moved into place.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FsError> {
    let io_error = |source: std::io::Error| FsError::IoError {
        path: path.display().to_string(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_error)?;

    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}
