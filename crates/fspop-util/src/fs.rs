use std::io::ErrorKind;
use std::path::Path;

/// Ensure a directory exists, creating it and any parents if needed.
///
/// An entry that already exists at `path` is not an error, matching
/// `mkdir -p`. If that entry is not a directory, later operations inside it
/// will fail instead.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("{} already exists", path.display());
            Ok(())
        }
        Err(e) => Err(e),
    }
}
