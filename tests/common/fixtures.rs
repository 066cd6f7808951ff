// Test fixtures for integration testing

use arkivo::core::archive::{ArchiveWriter, DocumentRecord};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build an archive bundle from (entry path, title, html body) rows
pub fn build_archive(root: &Path, entries: &[(&str, &str, &str)]) {
    let mut writer = ArchiveWriter::create(root, None).unwrap();
    for (path, title, body) in entries {
        writer
            .add_document(&DocumentRecord {
                path: path.to_string(),
                title: title.to_string(),
                content: format!("<html><body>{body}</body></html>").into_bytes(),
                mime: "text/html".to_string(),
            })
            .unwrap();
    }
    writer.finish().unwrap();
}

/// Build an archive bundle from raw records (for non-HTML payloads)
#[allow(dead_code)] // Not every integration suite needs raw records
pub fn build_archive_records(root: &Path, records: &[DocumentRecord]) {
    let mut writer = ArchiveWriter::create(root, None).unwrap();
    for record in records {
        writer.add_document(record).unwrap();
    }
    writer.finish().unwrap();
}

/// Two bundles where "alpha" matches exactly 2 entries in the first
/// and exactly 3 in the second
///
/// Entry titles avoid the probe terms so estimated match counts stay
/// exact; the bucket arithmetic tests depend on that.
#[allow(dead_code)] // Not every integration suite walks the buckets
pub fn alpha_fixture() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");

    build_archive(
        &first,
        &[
            ("A/One", "First", "<p>alpha alpha opens the set</p>"),
            ("A/Two", "Second", "<p>one more alpha entry</p>"),
            ("A/Three", "Third", "<p>filler without the term</p>"),
        ],
    );
    build_archive(
        &second,
        &[
            ("B/One", "Fourth", "<p>alpha alpha alpha dense</p>"),
            ("B/Two", "Fifth", "<p>alpha alpha medium</p>"),
            ("B/Three", "Sixth", "<p>alpha sparse</p>"),
            ("B/Four", "Seventh", "<p>filler without the term</p>"),
        ],
    );

    (temp, first, second)
}
