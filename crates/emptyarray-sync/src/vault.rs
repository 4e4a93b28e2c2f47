//! Filesystem-backed vault.

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use emptyarray_core::{Error, Result, Vault};

/// Normalize a vault-relative path.
///
/// Backslashes become `/`; empty, `.` and leading `/` segments are dropped.
/// Paths that climb out of the vault (`..`) or name nothing are rejected.
pub fn normalize_vault_path(path: &str) -> Result<String> {
    let mut segments = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => continue,
            ".." => {
                return Err(Error::InvalidInput(format!(
                    "vault path must not contain '..': {}",
                    path
                )))
            }
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Err(Error::InvalidInput(format!(
            "vault path is empty: {:?}",
            path
        )));
    }
    Ok(segments.join("/"))
}

/// Vault rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemVault {
    root: PathBuf,
}

impl FilesystemVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault-relative path.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        Ok(self.root.join(normalize_vault_path(path)?))
    }
}

#[async_trait]
impl Vault for FilesystemVault {
    async fn write(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.resolve(path)?;
        debug!(
            component = "vault",
            path,
            full_path = %full_path.display(),
            size = content.len(),
            "vault: write"
        );
        write_atomic(&full_path, content.as_bytes()).await
    }
}

/// Replace `path` with `data` via a sibling temp file and rename, creating
/// parent directories as needed.
///
/// Every call gets its own temp file, so concurrent writers to one path never
/// share bytes; the last rename wins.
pub(crate) async fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).await.map_err(|e| {
        warn!(parent = %dir.display(), error = %e, "vault: create_dir_all failed");
        e
    })?;

    let file_name = path
        .file_name()
        .and_then(|f| f.to_str())
        .ok_or_else(|| Error::InvalidInput(format!("not a file path: {}", path.display())))?;
    let prefix = format!(".{}.", file_name);

    let target = path.to_path_buf();
    let data = data.to_vec();
    tokio::task::spawn_blocking(move || persist_via_temp(&dir, &prefix, &target, &data))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))?
}

/// Blocking half of [`write_atomic`]. The temp file is removed on every
/// failure path when it is dropped.
fn persist_via_temp(dir: &Path, prefix: &str, target: &Path, data: &[u8]) -> Result<()> {
    let mut temp = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| {
            warn!(dir = %dir.display(), error = %e, "vault: temp file create failed");
            e
        })?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;

    temp.persist(target).map_err(|e| {
        warn!(from = %e.file.path().display(), to = %target.display(), error = %e.error, "vault: rename failed");
        e.error
    })?;

    Ok(())
}
