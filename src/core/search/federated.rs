//! Federated search across an ordered list of archives.
//!
//! A search session resolves one (query, result index) pair against the
//! concatenation of per-archive match counts, in registration order.
//! Each archive's match count is treated as a bucket: an index that does
//! not fit the current bucket is retried, unmodified, against the next
//! bucket. The index is deliberately NOT decremented by the sizes of
//! skipped buckets; this reproduces the observed upstream behavior and
//! is pinned by tests, so do not "fix" it without a product decision.
//!
//! The probe is strictly sequential: the bucket walk depends on ordered
//! cumulative counts, so archives cannot be probed in parallel.

use crate::core::archive::{ArchiveError, ArchiveHandle};
use crate::core::decode;
use crate::core::error::{ArkivoError, Result};
use crate::core::types::{ArchiveInfo, Document};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Check whether a MIME string names a text category
fn is_text_mime(raw: &str) -> bool {
    raw.parse::<mime::Mime>()
        .map(|m| m.type_() == mime::TEXT)
        .unwrap_or(false)
}

/// Ordered collection of archive handles with federated search
///
/// Owns its handles exclusively. Mutation (add/remove/close) must be
/// serialized by the caller; [`DocumentStore`](crate::core::archive::DocumentStore)
/// does this with a write lock.
#[derive(Debug, Default)]
pub struct FederatedSearcher {
    archives: Vec<ArchiveHandle>,
    positions: HashMap<PathBuf, usize>,
}

impl FederatedSearcher {
    /// Create an empty searcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open archives
    pub fn len(&self) -> usize {
        self.archives.len()
    }

    /// Whether no archives are open
    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }

    /// Open an archive and append it to the probe order
    ///
    /// Adding a path that is already open is a no-op returning `true`.
    pub fn add_archive(&mut self, path: &Path) -> std::result::Result<bool, ArchiveError> {
        if self.positions.contains_key(path) {
            tracing::debug!(path = %path.display(), "archive already open");
            return Ok(true);
        }

        let handle = ArchiveHandle::open(path)?;
        tracing::info!(
            path = %path.display(),
            documents = handle.metadata().document_count,
            "opened archive"
        );

        self.positions.insert(path.to_path_buf(), self.archives.len());
        self.archives.push(handle);
        Ok(true)
    }

    /// Close and detach an archive; `false` if it was not open
    pub fn remove_archive(&mut self, path: &Path) -> bool {
        let Some(position) = self.positions.remove(path) else {
            return false;
        };

        let mut handle = self.archives.remove(position);
        handle.close();
        self.rebuild_positions();

        tracing::info!(path = %path.display(), "removed archive");
        true
    }

    /// Close every archive; the searcher becomes empty
    pub fn close_all(&mut self) {
        let count = self.archives.len();
        for handle in &mut self.archives {
            handle.close();
        }
        self.archives.clear();
        self.positions.clear();

        if count > 0 {
            tracing::info!(count, "closed all archives");
        }
    }

    /// Identities of the open archives, in probe order
    pub fn open_paths(&self) -> Vec<PathBuf> {
        self.archives
            .iter()
            .map(|h| h.path().to_path_buf())
            .collect()
    }

    fn rebuild_positions(&mut self) {
        self.positions = self
            .archives
            .iter()
            .enumerate()
            .map(|(i, h)| (h.path().to_path_buf(), i))
            .collect();
    }

    /// Best-effort metadata listing for the open archives
    ///
    /// A per-archive failure is reported inline, not propagated.
    pub fn archive_info(&self) -> Vec<ArchiveInfo> {
        self.archives
            .iter()
            .map(|handle| {
                let path = handle.path().display().to_string();
                let filename = handle
                    .path()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                let uuid = Some(handle.metadata().uuid.to_string());

                match handle.document_count() {
                    Ok(count) => ArchiveInfo {
                        path,
                        filename,
                        document_count: Some(count),
                        uuid,
                        error: None,
                    },
                    Err(e) => ArchiveInfo {
                        path,
                        filename,
                        document_count: None,
                        uuid,
                        error: Some(e.to_string()),
                    },
                }
            })
            .collect()
    }

    /// Execute one search session
    ///
    /// Probes the archives in registration order and returns the first
    /// document produced. Failures to locate a candidate in one archive
    /// move the probe on; failures to render a located candidate
    /// (non-text content, missing payload, undecodable bytes) are
    /// terminal and surfaced immediately.
    pub fn search(&self, term: &str, index: usize) -> Result<Document> {
        if self.archives.is_empty() {
            return Err(ArkivoError::NoArchivesOpen);
        }

        for handle in &self.archives {
            let archive = handle.path().display().to_string();

            let matches = match handle.estimated_matches(term) {
                Ok(n) => n,
                Err(e) => {
                    tracing::warn!(%archive, error = %e, "match count failed, skipping archive");
                    continue;
                }
            };
            tracing::debug!(%archive, term, matches, "probed archive");

            // Bucket skip: the index is carried to the next archive
            // unmodified (see module docs).
            if matches == 0 || index >= matches {
                continue;
            }

            let entry_path = match handle.result_path_at(term, index) {
                Ok(path) => path,
                Err(e) => {
                    tracing::debug!(%archive, index, error = %e, "no usable ranked result");
                    continue;
                }
            };

            let item = match handle.retrieve(&entry_path) {
                Ok(item) => item,
                Err(ArchiveError::EntryNotFound(_)) => {
                    tracing::debug!(%archive, entry = %entry_path, "entry vanished, skipping");
                    continue;
                }
                Err(ArchiveError::ItemUnavailable { detail, .. }) => {
                    return Err(ArkivoError::ItemRetrieval {
                        archive,
                        path: entry_path,
                        detail,
                    });
                }
                Err(e) => {
                    tracing::warn!(%archive, entry = %entry_path, error = %e, "retrieval failed, skipping");
                    continue;
                }
            };

            if !is_text_mime(&item.mime) {
                return Err(ArkivoError::NonTextContent {
                    archive,
                    path: entry_path,
                    mime: item.mime,
                });
            }

            if item.content.is_empty() {
                return Err(ArkivoError::ItemRetrieval {
                    archive,
                    path: entry_path,
                    detail: "entry has an empty content payload".to_string(),
                });
            }

            let Some((html, encoding)) = decode::decode_text(&item.content) else {
                return Err(ArkivoError::DecodeFailure {
                    archive,
                    path: entry_path,
                    size: item.content.len(),
                });
            };
            tracing::debug!(%archive, entry = %entry_path, encoding, "decoded entry content");

            return Ok(Document {
                title: item.title,
                html,
                source: handle.path().to_path_buf(),
            });
        }

        Err(ArkivoError::NoMatches {
            query: term.to_string(),
        })
    }
}
