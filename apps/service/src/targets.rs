use std::{fs, io, path::Path};

/// Read a newline-delimited target list.
///
/// Every line is one target, verbatim: no trimming, no comments, and blank
/// lines become empty targets that fail classification when polled.
/// Bytes that are not UTF-8 are replaced rather than rejected.
pub fn read_target_list(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read(path)?;
    Ok(String::from_utf8_lossy(&contents).lines().map(str::to_string).collect())
}
