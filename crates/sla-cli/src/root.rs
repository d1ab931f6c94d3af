use std::path::{Path, PathBuf};

/// Resolve the project root holding `.sla/`.
///
/// Priority:
/// 1. `--root` flag / `SLA_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.sla/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_sla_dir(&cwd).unwrap_or(cwd)
}

fn find_sla_dir(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(sla_core::paths::SLA_DIR).is_dir() {
            return Some(dir);
        }
        dir = dir.parent()?.to_path_buf();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_sla_dir_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".sla")).unwrap();
        let subdir = dir.path().join("exports/weekly");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_sla_dir(&subdir).as_deref(), Some(dir.path()));
    }
}
