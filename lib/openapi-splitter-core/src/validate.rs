//! Precondition checks for the command-line input and output paths.
//!
//! These run before any document I/O: the splitting pipeline only starts once
//! both paths have passed. Checks inspect metadata only and have no side
//! effects on the filesystem.

use std::fs;
use std::path::Path;

use crate::SplitError;

/// Validates that `path` is an existing, readable, regular file.
///
/// # Errors
///
/// Returns the first failing precondition: [`SplitError::InputFileMissing`],
/// [`SplitError::InputNotAFile`], or [`SplitError::InputNotReadable`].
pub fn validate_input_file(path: impl AsRef<Path>) -> Result<(), SplitError> {
    let path = path.as_ref();
    let Ok(metadata) = fs::metadata(path) else {
        return Err(SplitError::InputFileMissing {
            path: path.to_path_buf(),
        });
    };
    if !metadata.is_file() {
        return Err(SplitError::InputNotAFile {
            path: path.to_path_buf(),
        });
    }
    if !is_readable(&metadata) {
        return Err(SplitError::InputNotReadable {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Validates that `path` is an existing, writable, empty directory.
///
/// # Errors
///
/// Returns the first failing precondition: [`SplitError::OutputDirMissing`],
/// [`SplitError::OutputNotADirectory`], [`SplitError::OutputDirNotWritable`],
/// or [`SplitError::OutputDirNotEmpty`].
pub fn validate_output_dir(path: impl AsRef<Path>) -> Result<(), SplitError> {
    let path = path.as_ref();
    let Ok(metadata) = fs::metadata(path) else {
        return Err(SplitError::OutputDirMissing {
            path: path.to_path_buf(),
        });
    };
    if !metadata.is_dir() {
        return Err(SplitError::OutputNotADirectory {
            path: path.to_path_buf(),
        });
    }
    if !is_writable(&metadata) {
        return Err(SplitError::OutputDirNotWritable {
            path: path.to_path_buf(),
        });
    }
    if fs::read_dir(path)?.next().is_some() {
        return Err(SplitError::OutputDirNotEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

// Owner permission bits only; ACLs are not consulted.
#[cfg(unix)]
fn is_readable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o400 != 0
}

#[cfg(not(unix))]
fn is_readable(_metadata: &fs::Metadata) -> bool {
    true
}

#[cfg(unix)]
fn is_writable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o200 != 0
}

#[cfg(not(unix))]
fn is_writable(metadata: &fs::Metadata) -> bool {
    !metadata.permissions().readonly()
}
