//! Arkivo - Federated Search over Offline Content Archives
//!
//! A search service that treats N independently-indexed content
//! archives as one logical search space. A query plus a global result
//! index is resolved across the archives in registration order, the
//! matched document is retrieved and decoded, and the HTML can be
//! converted to Markdown on demand.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg, decode
//!   - archive (bundle handles, writer, document store)
//!   - search (federated probe across archives)
//!   - convert (HTML to Markdown stage)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - Federated result-index resolution across ordered archives
//! - Full-text search via Tantivy (archives are pre-built index bundles)
//! - UTF-8 decoding with a strict windows-1252 fallback
//! - HTML to Markdown conversion with an independent failure domain
//! - Typed error taxonomy with not-found vs internal classification

// Core domain logic (protocol-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::archive::{ArchiveHandle, ArchiveSource, ArchiveWriter, DocumentStore};
pub use crate::core::config::Config;
pub use crate::core::convert::ConversionStage;
pub use crate::core::error::{ArkivoError, Result};
pub use crate::core::search::FederatedSearcher;
pub use crate::core::services::Services;
pub use crate::core::types::*;
