//! Query text helpers: canonical token form and year extraction.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s.\-()&]+").expect("separator pattern"));
static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("underscore pattern"));
static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b20\d{2}\b").expect("year pattern"));
static YEAR_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{2}").expect("embedded year pattern"));

/// Canonical comparison form: lower-cased, separator runs (whitespace, `.`, `-`, `(`, `)`, `&`)
/// folded into one `_`, outer underscores trimmed.
///
/// `normalize("Data   Structures-II (Sec.A)") == "data_structures_ii_sec_a"`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let joined = SEPARATOR_RUN.replace_all(&lowered, "_");
    let trimmed = joined.trim_matches('_');
    UNDERSCORE_RUN.replace_all(trimmed, "_").into_owned()
}

/// [`normalize`] for loosely typed JSON: strings are normalized, every other value is returned
/// unchanged.
pub fn normalize_value(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::String(s) => serde_json::Value::String(normalize(s)),
        other => other.clone(),
    }
}

/// Every standalone `20xx` word in `text`, in first-occurrence order with duplicates removed.
/// Used by the chat surface.
pub fn extract_years(text: &str) -> Vec<String> {
    collect_years(&YEAR_TOKEN, text)
}

/// Every `20xx` digit run in `text`, including ones glued to other characters (`pyq_2023`).
/// Used by the JSON API.
pub fn extract_years_anywhere(text: &str) -> Vec<String> {
    collect_years(&YEAR_ANYWHERE, text)
}

fn collect_years(pattern: &Regex, text: &str) -> Vec<String> {
    let mut years: Vec<String> = Vec::new();
    for m in pattern.find_iter(text) {
        let year = m.as_str();
        if !years.iter().any(|y| y == year) {
            years.push(year.to_string());
        }
    }
    years
}
