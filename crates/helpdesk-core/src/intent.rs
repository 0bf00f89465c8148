//! Keyword intent classifier.
//!
//! Categories are tested in a fixed order and the first whose keyword appears in the
//! case-folded query wins; a query mentioning both a timetable and faculty is a timetable
//! query. Nothing matched routes to [`Intent::Help`].

use serde::{Deserialize, Serialize};

/// Which category handler answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Timetable,
    Pyq,
    Faculty,
    Holiday,
    /// No keyword matched.
    Help,
}

/// Ordered `(intent, keywords)` table. Order is priority.
pub const INTENT_KEYWORDS: [(Intent, &[&str]); 4] = [
    (Intent::Timetable, &["timetable", "routine", "time table"]),
    (Intent::Pyq, &["pyq", "past paper", "pyqs"]),
    (Intent::Faculty, &["faculty", "contact", "staff"]),
    (Intent::Holiday, &["holiday", "break"]),
];

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timetable => "timetable",
            Self::Pyq => "pyq",
            Self::Faculty => "faculty",
            Self::Holiday => "holiday",
            Self::Help => "help",
        }
    }
}

/// Classifies raw query text.
pub fn classify(query: &str) -> Intent {
    let lowered = query.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Help)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_keyword_routes() {
        assert_eq!(classify("Show me the TIMETABLE"), Intent::Timetable);
        assert_eq!(classify("class routine please"), Intent::Timetable);
        assert_eq!(classify("time table for monday"), Intent::Timetable);
        assert_eq!(classify("pyq 2023"), Intent::Pyq);
        assert_eq!(classify("any past paper?"), Intent::Pyq);
        assert_eq!(classify("faculty list"), Intent::Faculty);
        assert_eq!(classify("contact for ECE"), Intent::Faculty);
        assert_eq!(classify("teaching staff"), Intent::Faculty);
        assert_eq!(classify("Holiday list"), Intent::Holiday);
        assert_eq!(classify("when is the winter break"), Intent::Holiday);
    }

    #[test]
    fn test_earlier_category_wins_ties() {
        assert_eq!(classify("timetable and faculty"), Intent::Timetable);
        assert_eq!(classify("faculty timetable"), Intent::Timetable);
        assert_eq!(classify("pyq of staff"), Intent::Pyq);
        assert_eq!(classify("staff holiday"), Intent::Faculty);
    }

    #[test]
    fn test_no_keyword_is_help() {
        assert_eq!(classify("hello there"), Intent::Help);
        assert_eq!(classify(""), Intent::Help);
    }

    #[test]
    fn test_matching_is_plain_substring() {
        // "breakfast" contains "break"
        assert_eq!(classify("breakfast menu"), Intent::Holiday);
    }
}
