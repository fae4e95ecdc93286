//! Discovery of the mref config file.

use std::path::{Path, PathBuf};

/// File names searched for, in priority order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["mref.yaml", "mref.yml", "mref.toml"];

/// Walk up the directory tree from `start` looking for a config file.
///
/// Returns the first match, or `None` once the filesystem root is reached.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;

    let mut current = start.as_path();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_file_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mref.yaml"), "array: q\n").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().canonicalize().unwrap().join("mref.yaml"));
    }

    #[test]
    fn walks_up_to_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mref.toml"), "array = \"q\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().canonicalize().unwrap().join("mref.toml"));
    }

    #[test]
    fn yaml_preferred_over_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mref.toml"), "").unwrap();
        std::fs::write(dir.path().join("mref.yaml"), "").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert!(found.ends_with("mref.yaml"));
    }

    #[test]
    fn nonexistent_start_returns_none() {
        assert!(find_config_file(Path::new("/nonexistent/mref/path")).is_none());
    }
}
