use super::backend::StorageBackend;
use crate::config::SnipzPaths;
use crate::error::{Result, SnipzError};
use crate::model::SnippetTable;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

pub struct FsBackend {
    config_dir: PathBuf,
    snippets_file: PathBuf,
}

impl FsBackend {
    pub fn new(paths: &SnipzPaths) -> Self {
        Self {
            config_dir: paths.config_dir.clone(),
            snippets_file: paths.snippets_file.clone(),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(SnipzError::Io)?;
        }
        Ok(())
    }

    /// Writes `content` to a fresh `tmp` file. New files get 0644 minus the umask;
    /// an existing snippet file passes its permissions on to the replacement.
    fn write_tmp(&self, tmp: &Path, content: &str) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options.open(tmp).map_err(SnipzError::Io)?;
        file.write_all(content.as_bytes()).map_err(SnipzError::Io)?;
        file.sync_all().map_err(SnipzError::Io)?;

        match fs::metadata(&self.snippets_file) {
            Ok(meta) => fs::set_permissions(tmp, meta.permissions()).map_err(SnipzError::Io),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnipzError::Io(e)),
        }
    }
}

impl StorageBackend for FsBackend {
    fn load_table(&self) -> Result<Option<SnippetTable>> {
        let content = match fs::read(&self.snippets_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.snippets_file.display(), "no snippet file yet");
                return Ok(None);
            }
            Err(e) => return Err(SnipzError::Io(e)),
        };

        let table: SnippetTable =
            serde_json::from_slice(&content).map_err(|source| SnipzError::Parse {
                path: self.snippets_file.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.snippets_file.display(),
            count = table.len(),
            "loaded snippets"
        );
        Ok(Some(table))
    }

    fn save_table(&self, table: &SnippetTable) -> Result<()> {
        self.ensure_dir(&self.config_dir)?;

        let content = serde_json::to_string_pretty(table)
            .map_err(|e| SnipzError::Store(format!("could not serialize snippets: {}", e)))?;

        // Atomic write
        let tmp_file = self
            .config_dir
            .join(format!(".snippets-{}.tmp", Uuid::new_v4()));
        if let Err(e) = self
            .write_tmp(&tmp_file, &content)
            .and_then(|_| fs::rename(&tmp_file, &self.snippets_file).map_err(SnipzError::Io))
        {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }

        tracing::debug!(
            path = %self.snippets_file.display(),
            count = table.len(),
            "saved snippets"
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.snippets_file.clone()
    }
}
