// Copyright 2026 Bmn Contributors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, unused_imports)]

use anyhow::Result;
use clap::{CommandFactory, Parser};

mod cli;
mod error;
mod extract;
mod fetch;
mod model;
mod render;

#[derive(Parser)]
#[command(
    name = "bmn",
    about = "bmn — look up shared logins for a domain on bugmenot.com",
    version,
    after_help = "Examples:\n  bmn --domain example.com\n  bmn --domain example.com --json --filter 50"
)]
struct Cli {
    /// Domain to look up shared logins for
    #[arg(long)]
    domain: Option<String>,

    /// Output results as JSON (machine-readable)
    #[arg(long)]
    json: bool,

    /// Keep only logins with a success rate at or above this percentage
    #[arg(long, default_value = "0")]
    filter: i64,

    /// Suppress non-essential output
    #[arg(long, short)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("BMN_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("BMN_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("BMN_VERBOSE", "1");
    }

    let directive = if cli.verbose { "bmn=debug" } else { "bmn=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();

    let result = match cli.domain.as_deref() {
        None | Some("") => {
            if !cli.quiet {
                eprintln!("  --domain is required.\n");
            }
            Cli::command().print_help()?;
            Ok(())
        }
        Some(domain) => cli::view_cmd::run(domain, cli.filter).await,
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}
