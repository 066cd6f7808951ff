//! Archive bundle authoring.
//!
//! Bundles are normally produced once, offline, and then opened
//! read-only by [`ArchiveHandle`](crate::core::archive::ArchiveHandle).
//! The writer indexes each entry's decoded text for search and stores
//! the raw bytes untouched, so retrieval hands back exactly what was
//! packed.

use crate::core::archive::bundle::{self, BundleFields, BundleMetadata, SCHEMA_VERSION};
use crate::core::error::{ArkivoError, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tantivy::{Index, IndexWriter, TantivyDocument};
use uuid::Uuid;

/// One entry to be packed into a bundle
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Archive-internal entry path (unique within the bundle)
    pub path: String,

    /// Entry title
    pub title: String,

    /// Raw content bytes, stored as-is
    pub content: Vec<u8>,

    /// MIME type string (e.g. "text/html")
    pub mime: String,
}

/// Writer for a new archive bundle
pub struct ArchiveWriter {
    root: PathBuf,
    title: Option<String>,
    writer: IndexWriter,
    fields: BundleFields,
    documents: u64,
}

impl ArchiveWriter {
    /// Create a new bundle at the given directory
    ///
    /// Fails if a bundle already exists there.
    pub fn create(root: &Path, title: Option<String>) -> Result<Self> {
        if bundle::metadata_path(root).exists() {
            return Err(ArkivoError::StorageError(format!(
                "archive bundle already exists at {}",
                root.display()
            )));
        }

        let index_dir = bundle::index_path(root);
        fs::create_dir_all(&index_dir)?;

        let schema = bundle::create_schema();
        let index = Index::create_in_dir(&index_dir, schema.clone())
            .map_err(|e| ArkivoError::StorageError(format!("Failed to create index: {e}")))?;

        let fields = BundleFields::from_schema(&schema)
            .map_err(|e| ArkivoError::StorageError(e.to_string()))?;

        // 50MB writer heap
        let writer = index
            .writer(50_000_000)
            .map_err(|e| ArkivoError::StorageError(format!("Failed to create writer: {e}")))?;

        Ok(Self {
            root: root.to_path_buf(),
            title,
            writer,
            fields,
            documents: 0,
        })
    }

    /// Add one entry to the bundle
    pub fn add_document(&mut self, record: &DocumentRecord) -> Result<()> {
        // The searchable text is a lossy decode of the payload; the
        // stored payload itself stays byte-exact.
        let searchable = String::from_utf8_lossy(&record.content);

        let mut doc = TantivyDocument::default();
        doc.add_text(self.fields.path, &record.path);
        doc.add_text(self.fields.title, &record.title);
        doc.add_text(self.fields.text, searchable.as_ref());
        doc.add_bytes(self.fields.content, record.content.as_slice());
        doc.add_text(self.fields.mime, &record.mime);

        self.writer
            .add_document(doc)
            .map_err(|e| ArkivoError::StorageError(format!("Failed to add document: {e}")))?;

        self.documents += 1;
        Ok(())
    }

    /// Number of entries added so far
    pub fn document_count(&self) -> u64 {
        self.documents
    }

    /// Commit the index and write `meta.json`
    pub fn finish(mut self) -> Result<BundleMetadata> {
        self.writer
            .commit()
            .map_err(|e| ArkivoError::StorageError(format!("Failed to commit: {e}")))?;

        let metadata = BundleMetadata {
            uuid: Uuid::new_v4(),
            title: self.title.clone(),
            document_count: self.documents,
            created_at: Utc::now(),
            schema_version: SCHEMA_VERSION,
        };
        bundle::write_metadata(&self.root, &metadata)?;

        tracing::info!(
            path = %self.root.display(),
            documents = self.documents,
            "archive bundle written"
        );

        Ok(metadata)
    }
}
