//! Arkivo CLI - Command-line interface for federated archive search
//!
//! # Examples
//!
//! ```bash
//! # Pack a directory of HTML files into an archive bundle
//! arkivo pack ./dump --output ./archives/wiki --title "Wiki"
//!
//! # Search the configured archives
//! arkivo search "zebra"
//!
//! # Second-ranked result, converted to Markdown
//! arkivo search "zebra" --index 1 --markdown
//!
//! # Search explicit bundles in a fixed order
//! arkivo search "zebra" --archive ./a --archive ./b
//!
//! # List archive metadata
//! arkivo archives --dir ./archives
//! ```

use arkivo::cli::{output, run, Cli};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing on stderr so stdout stays clean for documents
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arkivo=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
