//! HTML to Markdown conversion stage.
//!
//! Conversion is an independent failure domain: a document that was
//! found but cannot be converted is a different error class than a
//! document that was never found. The stage validates its input before
//! the engine runs and wraps every engine-side failure, including
//! structurally unexpected output, as `ConversionFailure`.

use crate::core::error::{ArkivoError, Result};

/// Conversion engine seam
///
/// The production engine is [`Html2MdConverter`]; tests inject failing
/// implementations to exercise the failure path.
pub trait Converter: Send + Sync {
    /// Convert HTML to Markdown; the error is an engine-side detail
    fn convert(&self, html: &str) -> std::result::Result<String, String>;
}

/// Markdown conversion via the html2md engine
#[derive(Debug, Default)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn convert(&self, html: &str) -> std::result::Result<String, String> {
        Ok(html2md::parse_html(html))
    }
}

/// The retrieve → convert pipeline's second stage
///
/// A pure transform over in-memory text; no archive or search state is
/// touched.
pub struct ConversionStage {
    converter: Box<dyn Converter>,
}

impl ConversionStage {
    /// Create a stage backed by the html2md engine
    pub fn new() -> Self {
        Self::with_converter(Box::new(Html2MdConverter))
    }

    /// Create a stage with a custom conversion engine
    pub fn with_converter(converter: Box<dyn Converter>) -> Self {
        Self { converter }
    }

    /// Convert HTML content to Markdown
    ///
    /// Empty or whitespace-only input fails `EmptyInput` before the
    /// engine is invoked. Engine errors and empty engine output fail
    /// `ConversionFailure`.
    pub fn convert(&self, html: &str, title: &str) -> Result<String> {
        if html.trim().is_empty() {
            return Err(ArkivoError::EmptyInput);
        }

        tracing::debug!(title, bytes = html.len(), "converting HTML to Markdown");

        let markdown = self
            .converter
            .convert(html)
            .map_err(ArkivoError::ConversionFailure)?;

        if markdown.trim().is_empty() {
            return Err(ArkivoError::ConversionFailure(format!(
                "conversion of '{title}' produced no output"
            )));
        }

        Ok(markdown)
    }
}

impl Default for ConversionStage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConversionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionStage").finish()
    }
}
