use crate::error::{Result, SnipzError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Directory under the user's config root that holds the snippet file.
pub const APP_DIR: &str = "micro";
pub const SNIPPETS_FILENAME: &str = "snippets.json";

/// Where the snippet table lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnipzPaths {
    pub config_dir: PathBuf,
    pub snippets_file: PathBuf,
}

impl SnipzPaths {
    /// Paths rooted at an explicit config directory.
    pub fn in_dir<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref().to_path_buf();
        let snippets_file = config_dir.join(SNIPPETS_FILENAME);
        Self {
            config_dir,
            snippets_file,
        }
    }

    /// `<home>/.config/micro/snippets.json`.
    ///
    /// Only the home directory is looked up; `XDG_CONFIG_HOME` is ignored.
    pub fn from_home() -> Result<Self> {
        let base = BaseDirs::new().ok_or_else(|| {
            SnipzError::Store("Could not determine the home directory".to_string())
        })?;
        Ok(Self::in_dir(base.home_dir().join(".config").join(APP_DIR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippets_file_sits_in_config_dir() {
        let paths = SnipzPaths::in_dir("/tmp/somewhere/micro");
        assert_eq!(paths.config_dir, PathBuf::from("/tmp/somewhere/micro"));
        assert_eq!(
            paths.snippets_file,
            PathBuf::from("/tmp/somewhere/micro/snippets.json")
        );
    }
}
