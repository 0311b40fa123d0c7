//! `bmn --domain <domain>` — fetch and display shared logins.

use crate::cli::output;
use crate::extract;
use crate::fetch::HttpClient;
use crate::render;
use anyhow::Result;
use tracing::debug;

/// Run the lookup pipeline for one domain.
pub async fn run(domain: &str, min_rate: i64) -> Result<()> {
    let client = HttpClient::new();
    let body = client.fetch_view(domain).await?;

    let result = extract::extract(&body, domain)?;

    if result.logins.is_empty() {
        if output::is_json() {
            output::print_json(&serde_json::to_value(&result)?);
        } else if !output::is_quiet() {
            eprintln!("  No logins found for '{domain}'.");
        }
        return Ok(());
    }

    let result = if min_rate > 0 {
        let filtered = result.filtered(min_rate);
        debug!(
            "filter {min_rate}%: {} of {} login(s) kept",
            filtered.logins.len(),
            result.logins.len()
        );
        filtered
    } else {
        result
    };

    if result.logins.is_empty() {
        if output::is_json() {
            output::print_json(&serde_json::to_value(&result)?);
        } else if !output::is_quiet() {
            eprintln!("  No logins with a success rate of at least {min_rate}% for '{domain}'.");
        }
        return Ok(());
    }

    if output::is_json() {
        println!("{}", render::render_json(&result)?);
    } else {
        println!("{}", render::render_table(&result));
    }

    Ok(())
}
