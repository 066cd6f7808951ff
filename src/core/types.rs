//! Core data types for the Arkivo service.
//!
//! This module defines the data structures exchanged at the service
//! boundary: retrieved documents, converted documents, and per-archive
//! metadata rows.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A document produced by a successful federated search
///
/// The HTML content is guaranteed non-empty; a failed search returns an
/// error instead of a partially-filled document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Entry title as stored in the archive
    pub title: String,

    /// Decoded HTML content
    pub html: String,

    /// Identity (path) of the archive the document came from
    pub source: PathBuf,
}

/// A document converted to Markdown
///
/// Produced only on successful conversion of a retrieved document;
/// carries the originating query and result index for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertedDocument {
    /// Original query term
    pub query: String,

    /// Requested global result index
    pub index: usize,

    /// Entry title as stored in the archive
    pub title: String,

    /// Markdown rendition of the HTML content
    pub markdown: String,
}

/// Metadata row for one open archive
///
/// Listing is best-effort: a per-archive metadata failure is reported
/// inline via `error` instead of failing the whole listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveInfo {
    /// Archive identity (full path)
    pub path: String,

    /// File name component of the path
    pub filename: String,

    /// Number of documents in the archive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_count: Option<u64>,

    /// Stable unique identifier assigned at bundle creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Inline failure description when metadata could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serialization() {
        let doc = Document {
            title: "Test Article".to_string(),
            html: "<p>body</p>".to_string(),
            source: PathBuf::from("/data/archives/wiki"),
        };

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("Test Article"));
        assert!(json.contains("<p>body</p>"));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, doc.title);
        assert_eq!(back.source, doc.source);
    }

    #[test]
    fn test_converted_document_carries_query_and_index() {
        let doc = ConvertedDocument {
            query: "zebra".to_string(),
            index: 3,
            title: "Zebra".to_string(),
            markdown: "# Zebra".to_string(),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let back: ConvertedDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.query, "zebra");
        assert_eq!(back.index, 3);
    }

    #[test]
    fn test_archive_info_omits_empty_fields() {
        let info = ArchiveInfo {
            path: "/data/archives/wiki".to_string(),
            filename: "wiki".to_string(),
            document_count: Some(10),
            uuid: Some("d3b07384-d9a0-4c9b-8f2a-1c1e2f3a4b5c".to_string()),
            error: None,
        };

        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("error"));

        let failed = ArchiveInfo {
            path: "/data/archives/broken".to_string(),
            filename: "broken".to_string(),
            document_count: None,
            uuid: None,
            error: Some("reader unavailable".to_string()),
        };

        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains("reader unavailable"));
        assert!(!json.contains("document_count"));
    }
}
