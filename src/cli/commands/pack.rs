//! Pack command - build an archive bundle from a directory of documents

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::archive::{ArchiveWriter, DocumentRecord};
use clap::Args;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arguments for the pack command
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Directory of source documents (.html, .htm, .txt)
    pub source: PathBuf,

    /// Bundle directory to create
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Bundle title stored in the metadata
    #[arg(long)]
    pub title: Option<String>,
}

/// MIME type for a source file, by extension
fn mime_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => Some("text/html"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// Execute the pack command
pub fn execute(args: PackArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    if !args.source.is_dir() {
        return Err(format!("Source is not a directory: {}", args.source.display()).into());
    }

    let mut writer = ArchiveWriter::create(&args.output, args.title.clone())?;
    let mut skipped = 0usize;

    for entry in WalkDir::new(&args.source)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(mime) = mime_for_extension(entry.path()) else {
            skipped += 1;
            continue;
        };

        let relative = entry
            .path()
            .strip_prefix(&args.source)?
            .to_string_lossy()
            .into_owned();
        let title = entry
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| relative.clone());
        let content = fs::read(entry.path())?;

        writer.add_document(&DocumentRecord {
            path: relative,
            title,
            content,
            mime: mime.to_string(),
        })?;
    }

    let packed = writer.document_count();
    let metadata = writer.finish()?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} Packed {} document(s) into {}",
                colors::success("OK"),
                colors::number(&packed.to_string()),
                colors::archive_path(&args.output.display().to_string())
            );
            if skipped > 0 {
                println!(
                    "{}",
                    colors::dim(&format!("skipped {skipped} unsupported file(s)"))
                );
            }
            println!("    {} {}", colors::label("uuid:"), metadata.uuid);
        }
        OutputFormat::Json => {
            let output = json!({
                "output": args.output,
                "documents": packed,
                "skipped": skipped,
                "uuid": metadata.uuid,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension(Path::new("a.html")), Some("text/html"));
        assert_eq!(mime_for_extension(Path::new("a.HTM")), Some("text/html"));
        assert_eq!(mime_for_extension(Path::new("notes.txt")), Some("text/plain"));
        assert_eq!(mime_for_extension(Path::new("logo.png")), None);
        assert_eq!(mime_for_extension(Path::new("no_extension")), None);
    }
}
