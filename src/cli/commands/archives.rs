//! Archives command - list open archives and their metadata

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the archives command
#[derive(Args, Debug)]
pub struct ArchivesArgs {
    /// Archive bundle to inspect (repeatable)
    #[arg(long = "archive", value_name = "PATH")]
    pub archives: Vec<PathBuf>,

    /// Directory to scan for archive bundles
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Execute the archives command
pub fn execute(
    args: ArchivesArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = super::source_from_args(&args.archives, args.dir.as_ref());
    let services = Services::open(config.clone(), source)?;

    let infos = services.list_archives();

    match format {
        OutputFormat::Human => {
            println!(
                "{} archive(s) open:\n",
                colors::number(&infos.len().to_string())
            );

            for info in &infos {
                println!("{}", colors::archive_path(&info.path));
                if let Some(count) = info.document_count {
                    println!(
                        "    {} {}",
                        colors::label("documents:"),
                        colors::number(&count.to_string())
                    );
                }
                if let Some(uuid) = &info.uuid {
                    println!("    {} {}", colors::label("uuid:"), colors::dim(uuid));
                }
                if let Some(error) = &info.error {
                    println!("    {} {}", colors::label("error:"), colors::warning(error));
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }
    }

    Ok(())
}
