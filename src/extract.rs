//! Extract shared-login blocks from the view page HTML.
//!
//! The page lists one `<article>` per shared login. Within a block the
//! `<kbd>` elements hold username, password, and an optional third value
//! in document order, and the single `<ul><li>` holds the success-rate
//! text. A barred domain is signaled by a fixed notice in the content
//! container instead of any blocks, so that check runs first.

use crate::error::Error;
use crate::model::{Login, LoginResult};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Fixed notice shown in place of results when the site refuses a domain.
pub const BARRED_NOTICE: &str = "This site has been barred from the bugmenot system.";

/// Parse `html` and extract every shared-login block, in page order.
///
/// Zero matching blocks is not an error; the caller decides how to react
/// to an empty result.
pub fn extract(html: &str, domain: &str) -> Result<LoginResult, Error> {
    if html.trim().is_empty() {
        return Err(Error::Parse("response body is empty".to_string()));
    }

    let document = Html::parse_document(html);

    // The barred check takes precedence: a barred page has no login
    // blocks, whatever else is in the markup.
    let notice_sel = Selector::parse("div #content p").expect("valid selector");
    if let Some(p) = document.select(&notice_sel).next() {
        if element_text(&p) == BARRED_NOTICE {
            return Err(Error::Barred);
        }
    }

    let article_sel = Selector::parse("article").expect("valid selector");
    let kbd_sel = Selector::parse("kbd").expect("valid selector");
    let rate_sel = Selector::parse("ul li").expect("valid selector");

    let mut result = LoginResult::new(domain);
    for article in document.select(&article_sel) {
        let values: Vec<String> = article
            .select(&kbd_sel)
            .map(|el| element_text(&el))
            .collect();

        // Blocks with fewer fields than expected are kept with the
        // missing positions empty, not rejected.
        result.logins.push(Login {
            username: values.first().cloned().unwrap_or_default(),
            password: values.get(1).cloned().unwrap_or_default(),
            other: values.get(2).cloned().unwrap_or_default(),
            rate: article
                .select(&rate_sel)
                .next()
                .map(|el| element_text(&el))
                .unwrap_or_default(),
        });
    }

    debug!("{} login block(s) for {domain}", result.logins.len());

    Ok(result)
}

/// Concatenated text of an element's descendant text nodes, trimmed.
fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
