// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path as StdPath;

fn report_err_if_not_a_file(file_path: &StdPath) -> io::Result<bool> {
    Err(io::Error::other(format!(
        "Should be a file, but is not: '{}'",
        file_path.display()
    )))
}

/// Checks whether the given path exists and is a file.
///
/// # Errors
///
/// - If the path exists but is not a file.
/// - If there is a permission problem.
/// - If there is an IO error.
pub fn look_for_file(file_path: &StdPath) -> io::Result<bool> {
    let path_exists = StdPath::try_exists(file_path)?;
    if path_exists && !fs::metadata(file_path)?.is_file() {
        return report_err_if_not_a_file(file_path);
    }
    Ok(path_exists)
}

/// Reads a vocabulary document into memory, as a whole.
///
/// # Errors
///
/// - If the path does not exist.
/// - If the path is not a file.
/// - If the content is not valid UTF-8.
/// - If there is a permission problem or other IO error.
pub fn read_document(file_path: &StdPath) -> io::Result<String> {
    if !look_for_file(file_path)? {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Vocabulary document not found: '{}'", file_path.display()),
        ));
    }
    fs::read_to_string(file_path)
}

#[must_use]
pub fn extract_file_ext(file: &StdPath) -> Option<&str> {
    file.extension().and_then(OsStr::to_str)
}
