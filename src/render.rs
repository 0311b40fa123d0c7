//! Render a lookup result as a bordered table or as JSON.

use crate::error::Error;
use crate::model::{Login, LoginResult};

const HEADERS: [&str; 4] = ["Username", "Password", "Other", "Rating"];

/// Render `result` as a bordered four-column table, one horizontal rule
/// between every row, prefixed with a `Results for <domain>:` line.
pub fn render_table(result: &LoginResult) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for login in &result.logins {
        for (i, cell) in cells(login).iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = rule_line(&widths);

    let mut out = format!("Results for {}:\n", result.domain);
    out.push_str(&rule);
    out.push_str(&format_row(&HEADERS, &widths));
    out.push_str(&rule);
    for login in &result.logins {
        out.push_str(&format_row(&cells(login), &widths));
        out.push_str(&rule);
    }
    out
}

/// Serialize `result` as a JSON document (`Domain`, `Logins`).
pub fn render_json(result: &LoginResult) -> Result<String, Error> {
    Ok(serde_json::to_string(result)?)
}

fn cells(login: &Login) -> [&str; 4] {
    [
        login.username.as_str(),
        login.password.as_str(),
        login.other.as_str(),
        login.rate.as_str(),
    ]
}

fn rule_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        let pad = w - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;

    fn result() -> LoginResult {
        LoginResult {
            domain: "example.com".to_string(),
            logins: vec![
                Login {
                    username: "alice".to_string(),
                    password: "hunter2".to_string(),
                    other: String::new(),
                    rate: "90% success rate".to_string(),
                },
                Login {
                    username: "bob".to_string(),
                    password: "pw".to_string(),
                    other: "12345".to_string(),
                    rate: "40% success rate".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_table_shape() {
        let table = render_table(&result());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines[0], "Results for example.com:");
        assert!(lines[1].starts_with("+-"));
        assert!(lines[2].contains("Username"));
        assert!(lines[2].contains("Rating"));

        // Rules above the header, below it, and after each of the 2 rows.
        let rules = lines.iter().filter(|l| l.starts_with('+')).count();
        assert_eq!(rules, 4);

        let rows: Vec<_> = lines
            .iter()
            .filter(|l| l.starts_with('|') && !l.contains("Username"))
            .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("alice"));
        assert!(rows[1].contains("12345"));
    }

    #[test]
    fn test_table_cells_aligned() {
        let table = render_table(&result());
        let widths: Vec<usize> = table
            .lines()
            .filter(|l| l.starts_with('|'))
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_json_field_names() {
        let rendered = render_json(&result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_json_eq!(
            value,
            serde_json::json!({
                "Domain": "example.com",
                "Logins": [
                    {
                        "Username": "alice",
                        "Password": "hunter2",
                        "Other": "",
                        "Rate": "90% success rate"
                    },
                    {
                        "Username": "bob",
                        "Password": "pw",
                        "Other": "12345",
                        "Rate": "40% success rate"
                    }
                ]
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let original = result();
        let rendered = render_json(&original).unwrap();
        let decoded: LoginResult = serde_json::from_str(&rendered).unwrap();
        assert_eq!(decoded, original);
    }
}
