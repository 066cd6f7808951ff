//! CLI command implementations

pub mod archives;
pub mod pack;
pub mod search;

pub use archives::ArchivesArgs;
pub use pack::PackArgs;
pub use search::SearchArgs;

use crate::core::archive::ArchiveSource;
use std::path::PathBuf;

/// Build an archive source from the shared CLI selection flags
///
/// Explicit `--archive` paths win over `--dir`; with neither, the
/// configured default source is used.
pub(crate) fn source_from_args(archives: &[PathBuf], dir: Option<&PathBuf>) -> ArchiveSource {
    if !archives.is_empty() {
        ArchiveSource::PathList(archives.to_vec())
    } else if let Some(dir) = dir {
        ArchiveSource::Directory(dir.clone())
    } else {
        ArchiveSource::Default
    }
}
