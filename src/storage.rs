//! Output directories and page files.

use log::info;
use std::path::Path;
use tokio::fs;

use crate::error::GrabError;

const NAME_MAX: usize = 255;
const ILLEGAL: [char; 9] = ['/', '?', '<', '>', '\\', ':', '*', '|', '"'];
const RESERVED: [&str; 4] = ["con", "prn", "aux", "nul"];

/// Creates exactly one directory level at `dir`.
///
/// Fails with [`GrabError::DirectoryExists`] if something is already there and
/// never creates missing parents.
pub async fn make_directory(dir: &Path) -> Result<(), GrabError> {
    fs::create_dir(dir)
        .await
        .map_err(|err| GrabError::io(dir, err))?;
    info!("Made {}", dir.display());
    Ok(())
}

/// Creates `dir` and any missing parents, succeeding if it already exists.
pub async fn ensure_directory(dir: &Path) -> Result<(), GrabError> {
    fs::create_dir_all(dir)
        .await
        .map_err(|err| GrabError::io(dir, err))
}

/// Writes `data` to `path`, replacing whatever was there.
pub async fn save_file(path: &Path, data: &[u8]) -> Result<(), GrabError> {
    fs::write(path, data)
        .await
        .map_err(|err| GrabError::io(path, err))
}

/// Turns free text into something usable as a single path segment.
pub fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .filter(|c| !ILLEGAL.contains(c) && !c.is_control())
        .collect();

    if out.chars().all(|c| c == '.') || is_reserved(&out) {
        out.clear();
    }

    let trimmed = out.trim_end_matches(['.', ' ']).len();
    out.truncate(trimmed);

    if out.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while !out.is_char_boundary(take) {
            take -= 1;
        }
        out.truncate(take);
    }

    if out.is_empty() {
        out.push('_');
    }

    out
}

// Windows device names, with or without an extension.
fn is_reserved(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or_default().to_lowercase();
    if RESERVED.contains(&stem.as_str()) {
        return true;
    }
    match stem.strip_prefix("com").or_else(|| stem.strip_prefix("lpt")) {
        Some(n) => n.len() == 1 && n.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
