//! Faculty department pages, optionally narrowed by department names found in the query.
//!
//! Only the chat surface narrows; the JSON API always lists every department.

use crate::dataset::{Dataset, DepartmentEntry};
use crate::text::normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacultyResult {
    /// Departments named in the query.
    Matched(Vec<DepartmentEntry>),
    /// No department named; every page is offered.
    All(Vec<DepartmentEntry>),
    /// The department list is empty.
    Unavailable,
}

/// True when `department` is mentioned in `query`, either verbatim (case-folded) or in
/// normalized form.
pub fn department_matches(department: &str, query: &str) -> bool {
    let name = department.to_lowercase();
    if name.is_empty() {
        return false;
    }
    if query.to_lowercase().contains(&name) {
        return true;
    }
    let name = normalize(department);
    !name.is_empty() && normalize(query).contains(&name)
}

pub fn resolve_faculty(dataset: &Dataset, query: &str) -> FacultyResult {
    let pages = dataset.departments();
    if pages.is_empty() {
        return FacultyResult::Unavailable;
    }

    let matched: Vec<DepartmentEntry> = pages
        .iter()
        .filter(|d| department_matches(&d.department, query))
        .cloned()
        .collect();
    tracing::debug!(target: "helpdesk::faculty", matched = matched.len(), "Faculty lookup");

    if matched.is_empty() {
        FacultyResult::All(pages)
    } else {
        FacultyResult::Matched(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FacultyTable;

    fn departments() -> Dataset {
        let mut data = Dataset::default();
        data.faculty = FacultyTable::from_entries([
            DepartmentEntry::new("CSE", "https://example.edu/cse"),
            DepartmentEntry::new("ECE", "https://example.edu/ece"),
            DepartmentEntry::new("Electrical & Electronics", "https://example.edu/eee"),
        ]);
        data
    }

    #[test]
    fn test_named_department_is_selected() {
        let result = resolve_faculty(&departments(), "tell me about cse faculty");
        assert_eq!(
            result,
            FacultyResult::Matched(vec![DepartmentEntry::new("CSE", "https://example.edu/cse")])
        );
    }

    #[test]
    fn test_several_departments_keep_dataset_order() {
        match resolve_faculty(&departments(), "ECE and CSE staff") {
            FacultyResult::Matched(found) => {
                let names: Vec<&str> = found.iter().map(|d| d.department.as_str()).collect();
                assert_eq!(names, vec!["CSE", "ECE"]);
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_normalized_name_matches_punctuation_variants() {
        assert!(department_matches(
            "Electrical & Electronics",
            "contact electrical-electronics office"
        ));
        assert!(!department_matches("", "anything"));
    }

    #[test]
    fn test_no_department_named_lists_all() {
        match resolve_faculty(&departments(), "faculty contacts") {
            FacultyResult::All(all) => assert_eq!(all.len(), 3),
            other => panic!("expected full list, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_pages_are_ignored() {
        let mut data = Dataset::default();
        data.faculty.department_pages = vec![
            DepartmentEntry::new("", "u").into(),
            DepartmentEntry::new("ME", "").into(),
            serde_json::json!({ "department": 5, "url": "https://example.edu/num" }),
        ];
        assert_eq!(resolve_faculty(&data, "faculty"), FacultyResult::Unavailable);
    }

    #[test]
    fn test_empty_list_is_unavailable() {
        assert_eq!(
            resolve_faculty(&Dataset::default(), "faculty"),
            FacultyResult::Unavailable
        );
    }
}
