//! Past-paper lookup with optional year filter.

use crate::dataset::{Dataset, PyqEntry};

/// A renderable past-paper link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyqLink {
    pub year: String,
    pub url: String,
}

impl PyqLink {
    pub fn title(&self) -> String {
        pyq_title(&self.year)
    }
}

/// Synthesized title; the dataset carries none.
pub fn pyq_title(year: &str) -> String {
    format!("All Subjects PYQs of {}", year)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PyqResult {
    /// Matching links, newest year first.
    Found {
        links: Vec<PyqLink>,
        requested_years: Vec<String>,
    },
    /// The PYQ table is empty or absent.
    Unavailable,
    /// Years were requested and none of them exist.
    NoneForYears(Vec<String>),
    /// No year filter, but the table holds no usable entry.
    NoneFound,
}

fn valid_link(entry: &PyqEntry) -> Option<PyqLink> {
    entry.parts().map(|(year, url)| PyqLink {
        year: year.to_string(),
        url: url.to_string(),
    })
}

/// Resolves a PYQ lookup. `requested_years` comes from the surface's own year scan; empty
/// means no filter.
pub fn resolve_pyqs(dataset: &Dataset, requested_years: Vec<String>) -> PyqResult {
    let entries = dataset.dept_pyqs();
    if entries.is_empty() {
        return PyqResult::Unavailable;
    }

    let mut links: Vec<PyqLink> = entries.iter().filter_map(valid_link).collect();
    // stable: equal years keep file order
    links.sort_by(|a, b| b.year.cmp(&a.year));
    if !requested_years.is_empty() {
        links.retain(|l| requested_years.contains(&l.year));
    }

    tracing::debug!(
        target: "helpdesk::pyq",
        years = ?requested_years,
        matched = links.len(),
        "PYQ lookup"
    );

    match (links.is_empty(), requested_years.is_empty()) {
        (false, _) => PyqResult::Found {
            links,
            requested_years,
        },
        (true, false) => PyqResult::NoneForYears(requested_years),
        (true, true) => PyqResult::NoneFound,
    }
}
