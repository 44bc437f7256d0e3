use std::fmt;

use serde::{Deserialize, Serialize};

const ORDINAL_MARKERS: [char; 3] = ['º', '°', 'ª'];
const WEEK_KEYWORDS: [&str; 2] = ["SEMANA", "WEEK"];

/// Canonical term ("bimestre") key.
///
/// Spreadsheets write terms as `1`, `1º` or `1°`; all of them key the same
/// calendar entry and week count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermKey(String);

impl TermKey {
    pub fn new(raw: &str) -> Self {
        let stripped: String = raw
            .trim()
            .chars()
            .filter(|ch| !ORDINAL_MARKERS.contains(ch))
            .collect();
        Self(stripped.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts `n` from a `SEMANA n` / `WEEK n` selector (case-insensitive).
///
/// Returns `None` when no keyword followed by whitespace and digits is found.
pub fn parse_week_number(label: &str) -> Option<u32> {
    let upper = label.to_uppercase();
    WEEK_KEYWORDS.iter().find_map(|keyword| {
        upper.match_indices(keyword).find_map(|(idx, _)| {
            let rest = &upper[idx + keyword.len()..];
            let trimmed = rest.trim_start();
            if trimmed.len() == rest.len() {
                return None;
            }
            let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
    })
}

/// Display label of a 1-based week number.
pub fn week_label(number: u32) -> String {
    format!("SEMANA {number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_key_drops_ordinal_markers() {
        assert_eq!(TermKey::new(" 3º ").as_str(), "3");
        assert_eq!(TermKey::new("2°").as_str(), "2");
        assert_eq!(TermKey::new("4").as_str(), "4");
        assert!(TermKey::new("  ").is_empty());
    }

    #[test]
    fn week_numbers_parse_from_both_keywords() {
        assert_eq!(parse_week_number("SEMANA 2"), Some(2));
        assert_eq!(parse_week_number("Week 11"), Some(11));
        assert_eq!(parse_week_number("SEMANA 3 (17/02 - 21/02)"), Some(3));
        assert_eq!(parse_week_number("SEMANA2"), None);
        assert_eq!(parse_week_number("2"), None);
        assert_eq!(parse_week_number(""), None);
    }
}
