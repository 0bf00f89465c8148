//! JSON payloads for the programmatic surface. Failure states are payloads, never panics.

use serde_json::{json, Value};

use crate::resolve::{HolidayLink, PyqResult, TimetableLink};

/// Literal key the PYQ payload nests under.
pub const DEPT_PYQ_PAYLOAD_KEY: &str = "DEPTPYQ";
pub const PYQ_NOT_FOUND_ERROR: &str = "No PYQs found for the given year(s).";
pub const ROOT_MESSAGE: &str = "College Helpdesk API is running.";

pub fn root() -> Value {
    json!({ "message": ROOT_MESSAGE })
}

/// Without a year filter the entries are a flat list; with one they are grouped under their
/// year (keys sorted).
pub fn pyqs(result: &PyqResult) -> Value {
    match result {
        PyqResult::Found {
            links,
            requested_years,
        } if !requested_years.is_empty() => {
            let mut by_year = serde_json::Map::new();
            for year in requested_years {
                let entries: Vec<Value> = links
                    .iter()
                    .filter(|l| &l.year == year)
                    .map(|l| json!({ "year": l.year, "url": l.url }))
                    .collect();
                if !entries.is_empty() {
                    by_year.insert(year.clone(), Value::Array(entries));
                }
            }
            json!({ "pyqs": { DEPT_PYQ_PAYLOAD_KEY: by_year } })
        }
        PyqResult::Found { links, .. } => {
            let entries: Vec<Value> = links
                .iter()
                .map(|l| json!({ "year": l.year, "url": l.url }))
                .collect();
            json!({ "pyqs": { DEPT_PYQ_PAYLOAD_KEY: entries } })
        }
        PyqResult::Unavailable | PyqResult::NoneFound => {
            json!({ "pyqs": { DEPT_PYQ_PAYLOAD_KEY: [] } })
        }
        PyqResult::NoneForYears(_) => json!({ "error": PYQ_NOT_FOUND_ERROR }),
    }
}

pub fn timetables(link: Option<&TimetableLink>) -> Value {
    let list: Vec<Value> = link
        .map(|t| json!({ "program": t.program, "link": t.link }))
        .into_iter()
        .collect();
    json!({ "timetables": list })
}

/// The full department list as stored; this surface never narrows by department name.
pub fn faculty(departments: &[Value]) -> Value {
    json!({ "faculty": { "department_pages": departments } })
}

pub fn holidays(link: Option<&HolidayLink>) -> Value {
    let list: Vec<Value> = link
        .map(|h| json!({ "title": h.title, "url": h.url }))
        .into_iter()
        .collect();
    json!({ "holidays": list })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::PyqLink;

    fn link(year: &str) -> PyqLink {
        PyqLink {
            year: year.to_string(),
            url: format!("https://example.edu/{}", year),
        }
    }

    #[test]
    fn test_pyqs_grouped_by_requested_year() {
        let result = PyqResult::Found {
            links: vec![link("2023"), link("2021")],
            requested_years: vec!["2021".into(), "2023".into()],
        };
        let payload = pyqs(&result);
        let grouped = payload["pyqs"]["DEPTPYQ"].as_object().unwrap();
        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["2021", "2023"]);
        assert_eq!(payload["pyqs"]["DEPTPYQ"]["2023"][0]["url"], "https://example.edu/2023");
    }

    #[test]
    fn test_pyqs_flat_without_filter() {
        let result = PyqResult::Found {
            links: vec![link("2022"), link("2020")],
            requested_years: vec![],
        };
        let payload = pyqs(&result);
        assert_eq!(payload["pyqs"]["DEPTPYQ"][0]["year"], "2022");
        assert_eq!(payload["pyqs"]["DEPTPYQ"][1]["year"], "2020");
    }

    #[test]
    fn test_pyqs_error_and_empty_payloads() {
        assert_eq!(
            pyqs(&PyqResult::NoneForYears(vec!["2019".into()])),
            json!({ "error": "No PYQs found for the given year(s)." })
        );
        assert_eq!(
            pyqs(&PyqResult::Unavailable),
            json!({ "pyqs": { "DEPTPYQ": [] } })
        );
    }

    #[test]
    fn test_empty_single_link_payloads() {
        assert_eq!(timetables(None), json!({ "timetables": [] }));
        assert_eq!(holidays(None), json!({ "holidays": [] }));
        assert_eq!(faculty(&[]), json!({ "faculty": { "department_pages": [] } }));
    }
}
