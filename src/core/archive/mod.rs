//! Archive bundle access and lifecycle management.
//!
//! An archive is a pre-built, read-only document bundle: a directory
//! holding a `meta.json` descriptor and a full-text index. This module
//! wraps everything the rest of the crate needs from bundles:
//!
//! - **bundle**: on-disk layout, index schema, bundle metadata
//! - **error**: archive-level error type
//! - **handle**: read access to one opened bundle
//! - **writer**: bundle authoring
//! - **store**: the set of bundles backing a federated searcher

pub mod bundle;
pub mod error;
pub mod handle;
pub mod store;
pub mod writer;

pub use bundle::{BundleMetadata, SCHEMA_VERSION};
pub use error::ArchiveError;
pub use handle::{ArchiveHandle, RetrievedItem};
pub use store::{ArchiveSource, DocumentStore};
pub use writer::{ArchiveWriter, DocumentRecord};
