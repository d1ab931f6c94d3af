use std::path::{Path, PathBuf};

pub const SLA_DIR: &str = ".sla";
pub const CONFIG_FILE: &str = ".sla/config.yaml";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_sla_dir() {
        let root = Path::new("/tmp/proj");
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/.sla/config.yaml"));
        assert!(config_path(root).starts_with(root.join(SLA_DIR)));
    }
}
