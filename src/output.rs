//! Atomic file output shared by all writers.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes `contents` to `path` via a temporary file in the same directory
/// that is renamed into place once fully written.
///
/// # Errors
/// Returns an I/O error if the temporary file cannot be created or written,
/// or if the rename fails. The destination is untouched in that case.
pub(crate) fn write_atomically<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|err| err.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
