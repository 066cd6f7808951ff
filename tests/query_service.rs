//! Query service integration tests
//!
//! Exercises the service boundary: raw and converted document
//! operations, error classification, and the metadata listing.

mod common;

use arkivo::core::archive::{ArchiveSource, DocumentRecord};
use arkivo::core::config::Config;
use arkivo::core::error::ArkivoError;
use arkivo::core::services::Services;
use common::fixtures::{build_archive, build_archive_records};
use std::path::PathBuf;
use tempfile::TempDir;

fn wiki_services() -> (TempDir, Services, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("wiki");

    build_archive(
        &root,
        &[
            (
                "A/Zebra",
                "Zebra",
                "<h1>Zebra</h1><p>The zebra is a striped equid of Africa.</p>",
            ),
            (
                "A/Quagga",
                "Quagga",
                "<h1>Quagga</h1><p>An extinct zebra subspecies.</p>",
            ),
        ],
    );

    let services =
        Services::open(Config::default(), ArchiveSource::SinglePath(root.clone())).unwrap();
    (temp, services, root)
}

#[test]
fn raw_document_round_trip() {
    let (_temp, services, root) = wiki_services();

    let doc = services.get_document("striped", 0).unwrap();
    assert_eq!(doc.title, "Zebra");
    assert_eq!(doc.source, root);
    assert!(doc.html.contains("<h1>Zebra</h1>"));
}

#[test]
fn converted_document_round_trip() {
    let (_temp, services, _root) = wiki_services();

    let doc = services.get_converted_document("striped", 0).unwrap();
    assert_eq!(doc.query, "striped");
    assert_eq!(doc.index, 0);
    assert_eq!(doc.title, "Zebra");
    assert!(doc.markdown.contains("Zebra"));
    // Markup is gone from the converted text
    assert!(!doc.markdown.contains("<h1>"));
    assert!(!doc.markdown.contains("</p>"));
}

#[test]
fn miss_classifies_as_not_found() {
    let (_temp, services, _root) = wiki_services();

    let err = services.get_document("okapi", 0).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.message().contains("okapi"));

    // Same classification through the converted operation
    let err = services.get_converted_document("okapi", 0).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn out_of_range_index_classifies_as_not_found() {
    let (_temp, services, _root) = wiki_services();

    // Only one entry matches "striped"
    let err = services.get_document("striped", 9).unwrap_err();
    assert!(matches!(err, ArkivoError::NoMatches { .. }));
    assert!(err.is_not_found());
}

#[test]
fn conversion_of_blank_document_is_internal_not_not_found() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("blank");

    // Whitespace-only text entry: it is found and decoded, then the
    // conversion stage rejects the empty input
    build_archive_records(
        &root,
        &[DocumentRecord {
            path: "A/Blank".to_string(),
            title: "Blank meteor page".to_string(),
            content: b"   \n   ".to_vec(),
            mime: "text/html".to_string(),
        }],
    );

    let services = Services::open(Config::default(), ArchiveSource::SinglePath(root)).unwrap();

    // The raw operation succeeds -- the document exists
    assert!(services.get_document("meteor", 0).is_ok());

    // The converted operation fails in the conversion domain
    let err = services.get_converted_document("meteor", 0).unwrap_err();
    assert!(matches!(err, ArkivoError::EmptyInput));
    assert!(!err.is_not_found());
    assert!(!err.is_bad_request());
}

#[test]
fn metadata_listing_is_per_archive() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("archives");
    build_archive(&dir.join("birds"), &[("B/Owl", "Owl", "<p>a night bird</p>")]);
    build_archive(
        &dir.join("trees"),
        &[
            ("T/Oak", "Oak", "<p>a broadleaf</p>"),
            ("T/Pine", "Pine", "<p>a conifer</p>"),
        ],
    );

    let services = Services::open(Config::default(), ArchiveSource::Directory(dir)).unwrap();

    let infos = services.list_archives();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].filename, "birds");
    assert_eq!(infos[0].document_count, Some(1));
    assert_eq!(infos[1].filename, "trees");
    assert_eq!(infos[1].document_count, Some(2));
    assert!(infos.iter().all(|i| i.uuid.is_some() && i.error.is_none()));

    // UUIDs are unique per bundle
    assert_ne!(infos[0].uuid, infos[1].uuid);
}

#[test]
fn invalid_query_classifies_as_bad_request() {
    let (_temp, services, _root) = wiki_services();

    let err = services.get_document("", 0).unwrap_err();
    assert!(err.is_bad_request());
    assert!(!err.is_not_found());
}
