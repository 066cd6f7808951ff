//! Unified service container for Arkivo
//!
//! Provides shared access to the document store and conversion stage,
//! and implements the query operations exposed to adapters: get a raw
//! document, get a converted document, and list archive metadata.
//! Adapters map errors to response classes with the predicates on
//! [`ArkivoError`].

use crate::core::archive::{ArchiveSource, DocumentStore};
use crate::core::config::Config;
use crate::core::convert::ConversionStage;
use crate::core::error::{ArkivoError, Result};
use crate::core::types::{ArchiveInfo, ConvertedDocument, Document};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Document store backing the federated searcher
    pub store: Arc<DocumentStore>,

    /// HTML to Markdown conversion stage
    pub conversion: Arc<ConversionStage>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Open services over an archive source
    pub fn open(config: Config, source: ArchiveSource) -> Result<Self> {
        let store = DocumentStore::open(source, &config)?;

        Ok(Self {
            store: Arc::new(store),
            conversion: Arc::new(ConversionStage::new()),
            config: Arc::new(config),
        })
    }

    fn validate_query(&self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(ArkivoError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let max_len = self.config.search.max_query_length;
        if query.len() > max_len {
            return Err(ArkivoError::InvalidQuery(format!(
                "Query exceeds maximum length of {max_len} characters"
            )));
        }

        Ok(())
    }

    /// Retrieve the document at the given global result index
    ///
    /// `NoMatches` classifies as not-found at the adapter boundary;
    /// render failures (non-text content, decode, retrieval) classify
    /// as internal because the document was located.
    pub fn get_document(&self, query: &str, index: usize) -> Result<Document> {
        self.validate_query(query)?;

        tracing::debug!(query, index, "raw document lookup");
        self.store.search(query, index)
    }

    /// Retrieve a document and convert it to Markdown
    ///
    /// A conversion failure is distinct from a not-found failure: the
    /// document *was* found.
    pub fn get_converted_document(&self, query: &str, index: usize) -> Result<ConvertedDocument> {
        let document = self.get_document(query, index)?;
        let markdown = self.conversion.convert(&document.html, &document.title)?;

        Ok(ConvertedDocument {
            query: query.to_string(),
            index,
            title: document.title,
            markdown,
        })
    }

    /// Best-effort metadata listing for the open archives
    pub fn list_archives(&self) -> Vec<ArchiveInfo> {
        self.store.archive_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::archive::{ArchiveWriter, DocumentRecord};
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn build_bundle(root: &Path, entries: &[(&str, &str, &str)]) {
        let mut writer = ArchiveWriter::create(root, None).unwrap();
        for (path, title, html) in entries {
            writer
                .add_document(&DocumentRecord {
                    path: path.to_string(),
                    title: title.to_string(),
                    content: html.as_bytes().to_vec(),
                    mime: "text/html".to_string(),
                })
                .unwrap();
        }
        writer.finish().unwrap();
    }

    fn services_fixture() -> (TempDir, Services) {
        let temp = tempdir().unwrap();
        let root = temp.path().join("wiki");
        build_bundle(
            &root,
            &[
                (
                    "A/Zebra",
                    "Zebra",
                    "<h1>Zebra</h1><p>The zebra is a striped equid.</p>",
                ),
                ("A/Horse", "Horse", "<h1>Horse</h1><p>A domesticated equid.</p>"),
            ],
        );

        let services =
            Services::open(Config::default(), ArchiveSource::SinglePath(root)).unwrap();
        (temp, services)
    }

    #[test]
    fn test_get_document() {
        let (_temp, services) = services_fixture();

        let doc = services.get_document("zebra", 0).unwrap();
        assert_eq!(doc.title, "Zebra");
        assert!(doc.html.contains("striped"));
    }

    #[test]
    fn test_get_document_no_matches_is_not_found() {
        let (_temp, services) = services_fixture();

        let err = services.get_document("walrus", 0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_converted_document() {
        let (_temp, services) = services_fixture();

        let doc = services.get_converted_document("zebra", 0).unwrap();
        assert_eq!(doc.query, "zebra");
        assert_eq!(doc.index, 0);
        assert_eq!(doc.title, "Zebra");
        assert!(doc.markdown.contains("Zebra"));
        assert!(!doc.markdown.contains("<h1>"));
    }

    #[test]
    fn test_empty_query_rejected() {
        let (_temp, services) = services_fixture();

        let err = services.get_document("  ", 0).unwrap_err();
        assert!(matches!(err, ArkivoError::InvalidQuery(_)));
        assert!(err.is_bad_request());
    }

    #[test]
    fn test_overlong_query_rejected() {
        let (_temp, services) = services_fixture();

        let query = "z".repeat(services.config.search.max_query_length + 1);
        let err = services.get_document(&query, 0).unwrap_err();
        assert!(matches!(err, ArkivoError::InvalidQuery(_)));
    }

    #[test]
    fn test_list_archives() {
        let (_temp, services) = services_fixture();

        let infos = services.list_archives();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].filename, "wiki");
        assert_eq!(infos[0].document_count, Some(2));
        assert!(infos[0].error.is_none());
    }

    #[test]
    fn test_services_clone_shares_state() {
        let (_temp, services) = services_fixture();
        let cloned = services.clone();

        assert!(Arc::ptr_eq(&services.store, &cloned.store));
        assert!(Arc::ptr_eq(&services.conversion, &cloned.conversion));
        assert!(Arc::ptr_eq(&services.config, &cloned.config));
    }
}
