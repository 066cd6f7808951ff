//! Bundle on-disk layout, index schema and metadata.
//!
//! A bundle directory looks like:
//!
//! ```text
//! my-archive/
//!   meta.json      <- BundleMetadata
//!   index/         <- Tantivy index
//! ```

use crate::core::archive::error::ArchiveError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tantivy::schema::{BytesOptions, Field, Schema, STORED, STRING, TEXT};
use uuid::Uuid;

/// Metadata descriptor file inside every bundle
pub const META_FILE: &str = "meta.json";

/// Index directory inside every bundle
pub const INDEX_DIR: &str = "index";

/// Current bundle schema version
/// Version 1: Initial schema (path, title, text, content, mime)
pub const SCHEMA_VERSION: u32 = 1;

/// Create the Tantivy schema for bundle entries
///
/// Fields:
/// - path: Archive-internal entry path (STRING | STORED)
/// - title: Entry title (TEXT | STORED)
/// - text: Searchable plain text (TEXT, not stored)
/// - content: Raw entry bytes (bytes, STORED)
/// - mime: MIME type string (STRING | STORED)
pub fn create_schema() -> Schema {
    let mut builder = Schema::builder();

    // Entry addressing
    builder.add_text_field("path", STRING | STORED);

    // Searchable fields
    builder.add_text_field("title", TEXT | STORED);
    builder.add_text_field("text", TEXT);

    // Payload (stored for retrieval only)
    builder.add_bytes_field("content", BytesOptions::default().set_stored());
    builder.add_text_field("mime", STRING | STORED);

    builder.build()
}

/// Resolved field handles for the bundle schema
#[derive(Debug, Clone, Copy)]
pub struct BundleFields {
    pub path: Field,
    pub title: Field,
    pub text: Field,
    pub content: Field,
    pub mime: Field,
}

impl BundleFields {
    /// Look up all schema fields by name
    pub fn from_schema(schema: &Schema) -> Result<Self, ArchiveError> {
        let field = |name: &str| {
            schema
                .get_field(name)
                .map_err(|e| ArchiveError::Index(format!("Missing {name} field: {e}")))
        };

        Ok(Self {
            path: field("path")?,
            title: field("title")?,
            text: field("text")?,
            content: field("content")?,
            mime: field("mime")?,
        })
    }
}

/// Bundle metadata persisted as `meta.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// Stable unique identifier assigned at creation
    pub uuid: Uuid,

    /// Optional human-readable bundle title
    pub title: Option<String>,

    /// Number of documents added to the bundle
    pub document_count: u64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Schema version the bundle was written with
    pub schema_version: u32,
}

/// Path of the metadata file inside a bundle
pub fn metadata_path(root: &Path) -> PathBuf {
    root.join(META_FILE)
}

/// Path of the index directory inside a bundle
pub fn index_path(root: &Path) -> PathBuf {
    root.join(INDEX_DIR)
}

/// Check whether a directory looks like an archive bundle
pub fn is_bundle_dir(root: &Path) -> bool {
    root.is_dir() && metadata_path(root).is_file()
}

/// Read bundle metadata from disk
pub fn read_metadata(root: &Path) -> Result<BundleMetadata, ArchiveError> {
    let meta_path = metadata_path(root);

    let contents = fs::read_to_string(&meta_path).map_err(|e| ArchiveError::OpenFailure {
        path: root.to_path_buf(),
        detail: format!("failed to read {META_FILE}: {e}"),
    })?;

    serde_json::from_str(&contents).map_err(|e| ArchiveError::OpenFailure {
        path: root.to_path_buf(),
        detail: format!("failed to parse {META_FILE}: {e}"),
    })
}

/// Write bundle metadata to disk
pub fn write_metadata(root: &Path, metadata: &BundleMetadata) -> crate::core::error::Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(metadata_path(root), json)?;
    Ok(())
}
