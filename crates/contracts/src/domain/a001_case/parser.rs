//! Parser for the case lines of `GET /dca/{id}/dashboard`.
//!
//! The backend sends each assigned case as a display string:
//!
//! ```text
//! Jane Doe - $1,234.50 (45 days overdue)
//! ```
//!
//! The format has no schema of its own. Lines that do not follow it still
//! produce a record (name only, zero amount and days) so the case list can
//! always be rendered.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CASE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(.+?)\s*-\s*\$([0-9,]+\.?[0-9]*)\s*\(([0-9]+)\s*days?\s*overdue\)")
        .expect("case line pattern is a valid regex")
});

const NAME_SEPARATOR: &str = " - ";

/// Structured view of a single case line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCase {
    pub customer_name: String,
    pub amount_due: f64,
    pub days_overdue: i64,
}

/// Result of [`parse_case_line`], tagged with the path that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "case", rename_all = "snake_case")]
pub enum CaseLine {
    /// The line followed the `name - $amount (N days overdue)` format
    Matched(ParsedCase),
    /// Name taken from the text before the first `" - "`, amount and days zeroed
    Fallback(ParsedCase),
}

impl CaseLine {
    pub fn case(&self) -> &ParsedCase {
        match self {
            CaseLine::Matched(case) | CaseLine::Fallback(case) => case,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, CaseLine::Matched(_))
    }
}

/// Parse a raw case line. Never panics.
pub fn parse_case_line(raw: &str) -> CaseLine {
    match try_match(raw) {
        Some(case) => CaseLine::Matched(case),
        None => CaseLine::Fallback(fallback(raw)),
    }
}

fn try_match(raw: &str) -> Option<ParsedCase> {
    let caps = CASE_LINE_RE.captures(raw)?;

    let customer_name = caps.get(1)?.as_str().trim().to_string();
    let amount_due = caps
        .get(2)?
        .as_str()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())?;
    // Out-of-range day counts drop to the fallback
    let days_overdue = caps.get(3)?.as_str().parse::<i64>().ok()?;

    Some(ParsedCase {
        customer_name,
        amount_due,
        days_overdue,
    })
}

fn fallback(raw: &str) -> ParsedCase {
    let name = raw.split(NAME_SEPARATOR).next().unwrap_or_default();
    let customer_name = if name.is_empty() { raw } else { name };

    ParsedCase {
        customer_name: customer_name.to_string(),
        amount_due: 0.0,
        days_overdue: 0,
    }
}
