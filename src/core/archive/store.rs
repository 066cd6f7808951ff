//! Document store: lifecycle of the archive set behind a searcher.
//!
//! The store resolves a tagged archive source into an ordered path
//! list once at construction, opens the bundles, and serializes
//! mutations (add/remove/close) against concurrent searches with a
//! read-write lock.

use crate::core::archive::bundle;
use crate::core::config::Config;
use crate::core::error::{ArkivoError, Result};
use crate::core::search::FederatedSearcher;
use crate::core::types::{ArchiveInfo, Document};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Where a store's archives come from
///
/// Resolved once at construction into a normalized, ordered path list.
#[derive(Debug, Clone)]
pub enum ArchiveSource {
    /// One archive bundle directory
    SinglePath(PathBuf),

    /// A directory scanned for archive bundles
    Directory(PathBuf),

    /// An explicit list of archive bundle directories
    PathList(Vec<PathBuf>),

    /// Whatever the configuration names (explicit path, else directory)
    Default,
}

/// The set of archives backing a federated searcher
///
/// Searches take the read lock and may run concurrently; `add`,
/// `remove` and `close_all` take the write lock, excluding readers
/// during mutation.
pub struct DocumentStore {
    searcher: RwLock<FederatedSearcher>,
}

impl DocumentStore {
    /// Open a store from an archive source
    ///
    /// An explicitly named path that does not exist is fatal
    /// (`NotFound`); a discovered bundle that fails to open is skipped
    /// with a warning. An empty resolved set fails `InvalidSource` --
    /// a store never starts with nothing to search.
    pub fn open(source: ArchiveSource, config: &Config) -> Result<Self> {
        let paths = resolve_source(source, config)?;

        let mut federated = FederatedSearcher::new();
        for path in &paths {
            if let Err(e) = federated.add_archive(path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "skipping archive that failed to open"
                );
            }
        }

        if federated.is_empty() {
            return Err(ArkivoError::InvalidSource(
                "no archive bundles could be opened from the resolved source".to_string(),
            ));
        }

        tracing::info!(archives = federated.len(), "document store opened");
        Ok(Self {
            searcher: RwLock::new(federated),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, FederatedSearcher> {
        self.searcher.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, FederatedSearcher> {
        self.searcher.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Execute a federated search session
    pub fn search(&self, term: &str, index: usize) -> Result<Document> {
        self.read().search(term, index)
    }

    /// Open and append an archive
    ///
    /// `NotFound` if the path is absent; a no-op returning `true` if
    /// the archive is already open.
    pub fn add(&self, path: &Path) -> Result<bool> {
        if !path.exists() {
            return Err(ArkivoError::NotFound(path.display().to_string()));
        }

        self.write().add_archive(path).map_err(ArkivoError::from)
    }

    /// Close and detach an archive; `false` if it was not open
    pub fn remove(&self, path: &Path) -> bool {
        self.write().remove_archive(path)
    }

    /// Identities of the open archives, in probe order
    pub fn list_open(&self) -> Vec<PathBuf> {
        self.read().open_paths()
    }

    /// Number of open archives
    pub fn archive_count(&self) -> usize {
        self.read().len()
    }

    /// Close every archive; subsequent searches fail `NoArchivesOpen`
    pub fn close_all(&self) {
        self.write().close_all();
    }

    /// Best-effort metadata listing for the open archives
    pub fn archive_info(&self) -> Vec<ArchiveInfo> {
        self.read().archive_info()
    }
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("archives", &self.list_open())
            .finish()
    }
}

/// Resolve an archive source into a normalized, ordered path list
fn resolve_source(source: ArchiveSource, config: &Config) -> Result<Vec<PathBuf>> {
    match source {
        ArchiveSource::Default => resolve_source(config.default_source(), config),

        ArchiveSource::SinglePath(path) => {
            if !path.exists() {
                return Err(ArkivoError::NotFound(path.display().to_string()));
            }
            if !bundle::is_bundle_dir(&path) {
                return Err(ArkivoError::InvalidSource(format!(
                    "not an archive bundle: {}",
                    path.display()
                )));
            }
            Ok(vec![path])
        }

        ArchiveSource::Directory(dir) => {
            if !dir.exists() {
                return Err(ArkivoError::NotFound(dir.display().to_string()));
            }
            if !dir.is_dir() {
                return Err(ArkivoError::InvalidSource(format!(
                    "not a directory: {}",
                    dir.display()
                )));
            }

            let pattern = dir.join("*").join(bundle::META_FILE);
            let pattern = pattern.to_string_lossy();
            let entries = glob::glob(&pattern)
                .map_err(|e| ArkivoError::InvalidSource(format!("bad discovery pattern: {e}")))?;

            let mut found: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .filter_map(|meta| meta.parent().map(Path::to_path_buf))
                .collect();

            // Lexicographic order is authoritative: result-index
            // resolution depends on a deterministic archive order.
            found.sort();

            if found.is_empty() {
                tracing::warn!(dir = %dir.display(), "no archive bundles found in directory");
            }
            Ok(found)
        }

        ArchiveSource::PathList(paths) => {
            if paths.is_empty() {
                return Err(ArkivoError::InvalidSource(
                    "empty archive path list".to_string(),
                ));
            }

            let mut valid = Vec::with_capacity(paths.len());
            for path in paths {
                if !path.exists() {
                    return Err(ArkivoError::NotFound(path.display().to_string()));
                }
                if bundle::is_bundle_dir(&path) {
                    valid.push(path);
                } else {
                    tracing::warn!(
                        path = %path.display(),
                        "skipping path that is not an archive bundle"
                    );
                }
            }

            if valid.is_empty() {
                return Err(ArkivoError::InvalidSource(
                    "no valid archive bundles in the provided list".to_string(),
                ));
            }
            Ok(valid)
        }
    }
}
