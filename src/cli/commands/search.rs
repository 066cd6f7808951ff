//! Search command - federated search across archives

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query term
    pub query: String,

    /// Global result index across all archives
    #[arg(long, short = 'i', default_value = "0")]
    pub index: usize,

    /// Convert the matched document to Markdown
    #[arg(long, short = 'm')]
    pub markdown: bool,

    /// Archive bundle to search (repeatable)
    #[arg(long = "archive", value_name = "PATH")]
    pub archives: Vec<PathBuf>,

    /// Directory to scan for archive bundles
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = super::source_from_args(&args.archives, args.dir.as_ref());
    let services = Services::open(config.clone(), source)?;

    if args.markdown {
        let doc = services.get_converted_document(&args.query, args.index)?;

        match format {
            OutputFormat::Human => {
                println!("{}", colors::title(&doc.title));
                println!(
                    "{}",
                    colors::dim(&format!("query: '{}', index: {}", doc.query, doc.index))
                );
                println!();
                println!("{}", doc.markdown);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
        }
    } else {
        let doc = services.get_document(&args.query, args.index)?;

        match format {
            OutputFormat::Human => {
                println!("{}", colors::title(&doc.title));
                println!(
                    "{}",
                    colors::dim(&format!("from: {}", doc.source.display()))
                );
                println!();
                println!("{}", doc.html);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
        }
    }

    Ok(())
}
