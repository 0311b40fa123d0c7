// Copyright 2026 Bmn Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types for a shared-login lookup.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One shared login scraped from the view page.
///
/// `other` is empty unless the block carried a third value (some sites
/// want an extra token such as a zip code). `rate` is the success-rate
/// text verbatim, e.g. "78% success rate" — it is stored unparsed.
///
/// Field names serialize in PascalCase (`Username`, `Password`, `Other`,
/// `Rate`); that is the wire shape consumers of the JSON output expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Login {
    pub username: String,
    pub password: String,
    pub other: String,
    pub rate: String,
}

/// All logins found for one queried domain, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResult {
    /// The domain exactly as requested, never rewritten by filtering.
    pub domain: String,
    pub logins: Vec<Login>,
}

impl LoginResult {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            logins: Vec::new(),
        }
    }

    /// Logins whose success rate is at least `min_rate` percent.
    ///
    /// The rate is the first run of decimal digits anywhere in the rating
    /// text; text with no digits counts as 0. `min_rate <= 0` keeps
    /// everything. The queried domain and the relative order of the
    /// surviving logins are preserved.
    pub fn filtered(&self, min_rate: i64) -> LoginResult {
        if min_rate <= 0 {
            return self.clone();
        }

        let digits = Regex::new("[0-9]+").expect("digit regex is valid");

        let logins = self
            .logins
            .iter()
            .filter(|login| {
                let rate = digits
                    .find(&login.rate)
                    .and_then(|m| m.as_str().parse::<i64>().ok())
                    .unwrap_or(0);
                rate >= min_rate
            })
            .cloned()
            .collect();

        LoginResult {
            domain: self.domain.clone(),
            logins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, rate: &str) -> Login {
        Login {
            username: username.to_string(),
            password: "hunter2".to_string(),
            other: String::new(),
            rate: rate.to_string(),
        }
    }

    fn result() -> LoginResult {
        LoginResult {
            domain: "example.com".to_string(),
            logins: vec![
                login("alice", "90% success rate"),
                login("bob", "40% success rate"),
                login("carol", "never worked"),
                login("dave", "10% success rate"),
            ],
        }
    }

    #[test]
    fn test_filter_zero_is_identity() {
        let r = result();
        assert_eq!(r.filtered(0), r);
        assert_eq!(r.filtered(-5), r);
    }

    #[test]
    fn test_filter_threshold_keeps_order_and_domain() {
        let r = result().filtered(30);
        assert_eq!(r.domain, "example.com");
        let names: Vec<_> = r.logins.iter().map(|l| l.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_filter_excludes_rates_without_digits() {
        let r = result().filtered(1);
        assert!(r.logins.iter().all(|l| l.username != "carol"));
    }

    #[test]
    fn test_filter_uses_first_digit_run() {
        // Deliberate: a leading non-rate number wins over the percentage.
        let r = LoginResult {
            domain: "example.com".to_string(),
            logins: vec![login("eve", "updated 2024: 78% success rate")],
        };
        assert_eq!(r.filtered(100).logins.len(), 1);
        assert_eq!(r.filtered(2025).logins.len(), 0);
    }

    #[test]
    fn test_filter_boundary_is_inclusive() {
        let r = result().filtered(40);
        let names: Vec<_> = r.logins.iter().map(|l| l.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }
}
