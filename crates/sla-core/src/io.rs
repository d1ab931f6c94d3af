use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `contents` in one rename, creating parent directories.
///
/// The staging file sits next to the target so the rename never crosses
/// filesystems; readers see either the old config or the new one.
pub fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut staged = tempfile::Builder::new()
        .prefix(".sla-staged-")
        .tempfile_in(parent)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
