//! Read access to one opened archive bundle.
//!
//! An [`ArchiveHandle`] wraps the Tantivy index of a single bundle and
//! exposes the operations the federated search layer needs: estimated
//! match counts, ranked result paths, and entry retrieval by path.

use crate::core::archive::bundle::{self, BundleFields, BundleMetadata, SCHEMA_VERSION};
use crate::core::archive::error::ArchiveError;
use std::path::{Path, PathBuf};
use tantivy::collector::{Count, TopDocs};
use tantivy::query::{Query, QueryParser, TermQuery};
use tantivy::schema::{IndexRecordOption, Value};
use tantivy::{Index, IndexReader, TantivyDocument, Term};

/// An entry retrieved from an archive
#[derive(Debug, Clone)]
pub struct RetrievedItem {
    /// Entry title as stored in the archive
    pub title: String,

    /// Raw content bytes (encoding unknown)
    pub content: Vec<u8>,

    /// MIME type string recorded for the entry
    pub mime: String,
}

/// One opened archive bundle
///
/// Handles are exclusively owned by the store holding them and are
/// never shared between stores. `close` is idempotent; operations on a
/// closed handle fail with [`ArchiveError::Closed`].
pub struct ArchiveHandle {
    path: PathBuf,
    metadata: BundleMetadata,
    inner: Option<OpenBundle>,
}

struct OpenBundle {
    index: Index,
    reader: IndexReader,
    fields: BundleFields,
}

impl std::fmt::Debug for ArchiveHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveHandle")
            .field("path", &self.path)
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl ArchiveHandle {
    /// Open an archive bundle
    ///
    /// Requires `meta.json` and a readable index directory; the bundle
    /// index is presumed pre-built, nothing is written.
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        if !path.exists() {
            return Err(ArchiveError::NotFound(path.to_path_buf()));
        }

        let metadata = bundle::read_metadata(path)?;
        if metadata.schema_version > SCHEMA_VERSION {
            return Err(ArchiveError::OpenFailure {
                path: path.to_path_buf(),
                detail: format!(
                    "bundle schema version {} is newer than supported version {}",
                    metadata.schema_version, SCHEMA_VERSION
                ),
            });
        }

        let index =
            Index::open_in_dir(bundle::index_path(path)).map_err(|e| ArchiveError::OpenFailure {
                path: path.to_path_buf(),
                detail: format!("failed to open index: {e}"),
            })?;

        let fields = BundleFields::from_schema(&index.schema())?;

        let reader = index.reader().map_err(|e| ArchiveError::OpenFailure {
            path: path.to_path_buf(),
            detail: format!("failed to create reader: {e}"),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            metadata,
            inner: Some(OpenBundle {
                index,
                reader,
                fields,
            }),
        })
    }

    /// Archive identity (the path it was opened from)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bundle metadata loaded at open time
    pub fn metadata(&self) -> &BundleMetadata {
        &self.metadata
    }

    /// Whether the handle is still open
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    /// Close the handle, releasing the index resources
    ///
    /// Idempotent; subsequent read operations fail with `Closed`.
    pub fn close(&mut self) {
        if self.inner.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed archive");
        }
    }

    fn open_bundle(&self) -> Result<&OpenBundle, ArchiveError> {
        self.inner.as_ref().ok_or(ArchiveError::Closed)
    }

    fn parse_query(
        &self,
        open: &OpenBundle,
        term: &str,
    ) -> Result<Box<dyn Query>, ArchiveError> {
        let parser =
            QueryParser::for_index(&open.index, vec![open.fields.title, open.fields.text]);
        parser
            .parse_query(term)
            .map_err(|e| ArchiveError::Index(format!("failed to parse query '{term}': {e}")))
    }

    /// Estimated number of entries matching the query
    ///
    /// Zero is a valid "no matches" answer, not an error.
    pub fn estimated_matches(&self, term: &str) -> Result<usize, ArchiveError> {
        let open = self.open_bundle()?;
        let query = self.parse_query(open, term)?;
        let searcher = open.reader.searcher();

        searcher
            .search(&query, &Count)
            .map_err(|e| ArchiveError::Index(format!("count query failed: {e}")))
    }

    /// Entry path of the ranked result at `local_index`
    ///
    /// The ranked result set can be shorter than the estimated match
    /// count; in that case the answer is `IndexOutOfRange`, never a
    /// stale path.
    pub fn result_path_at(&self, term: &str, local_index: usize) -> Result<String, ArchiveError> {
        let open = self.open_bundle()?;
        let query = self.parse_query(open, term)?;
        let searcher = open.reader.searcher();

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(1).and_offset(local_index))
            .map_err(|e| ArchiveError::Index(format!("ranked query failed: {e}")))?;

        let (_score, doc_address) =
            top_docs
                .into_iter()
                .next()
                .ok_or_else(|| ArchiveError::IndexOutOfRange {
                    query: term.to_string(),
                    index: local_index,
                })?;

        let doc: TantivyDocument = searcher
            .doc(doc_address)
            .map_err(|e| ArchiveError::Index(format!("failed to load document: {e}")))?;

        doc.get_first(open.fields.path)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| ArchiveError::Index("document is missing the path field".to_string()))
    }

    /// Retrieve an entry by its archive-internal path
    pub fn retrieve(&self, entry_path: &str) -> Result<RetrievedItem, ArchiveError> {
        let open = self.open_bundle()?;
        let searcher = open.reader.searcher();

        let query = TermQuery::new(
            Term::from_field_text(open.fields.path, entry_path),
            IndexRecordOption::Basic,
        );

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(1))
            .map_err(|e| ArchiveError::Index(format!("entry lookup failed: {e}")))?;

        let (_score, doc_address) = top_docs
            .into_iter()
            .next()
            .ok_or_else(|| ArchiveError::EntryNotFound(entry_path.to_string()))?;

        let doc: TantivyDocument = searcher
            .doc(doc_address)
            .map_err(|e| ArchiveError::Index(format!("failed to load document: {e}")))?;

        let title = doc
            .get_first(open.fields.title)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let mime = doc
            .get_first(open.fields.mime)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let content = doc
            .get_first(open.fields.content)
            .and_then(|v| v.as_bytes())
            .map(<[u8]>::to_vec)
            .ok_or_else(|| ArchiveError::ItemUnavailable {
                path: entry_path.to_string(),
                detail: "stored content payload is missing".to_string(),
            })?;

        Ok(RetrievedItem {
            title,
            content,
            mime,
        })
    }

    /// Number of documents in the archive
    pub fn document_count(&self) -> Result<u64, ArchiveError> {
        let open = self.open_bundle()?;
        Ok(open.reader.searcher().num_docs())
    }
}
