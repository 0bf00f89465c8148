//! Chat-surface rendering: Markdown-style `[label](url)` links, `**bold**` terms, one `- ` line
//! per entry.

use crate::dataset::DepartmentEntry;
use crate::resolve::{FacultyResult, HolidayLink, PyqResult, TimetableLink};

pub const HELP_MESSAGE: &str =
    "I can help with: **timetables**, **PYQs**, **faculty contacts**, and **holidays**.";
pub const GREETING: &str =
    "Ask me for **timetables**, **PYQs**, **faculty contacts**, or the **holiday list**!";
pub const DATA_UNAVAILABLE: &str =
    "❌ Data is not available or failed to load. Please check `data.json`.";

pub fn timetable(link: Option<&TimetableLink>) -> String {
    match link {
        Some(t) => format!(
            "Here is the **General Timetable** link:\n- [College Timetable]({})",
            t.link
        ),
        None => "Timetable data not available.".to_string(),
    }
}

pub fn pyqs(result: &PyqResult) -> String {
    match result {
        PyqResult::Found { links, .. } => {
            let mut out = String::from("Here are the Past Year Question Papers I found:\n");
            for link in links {
                out.push_str(&format!("- [{}]({})\n", link.title(), link.url));
            }
            out
        }
        PyqResult::Unavailable => "Data is not available".to_string(),
        PyqResult::NoneForYears(years) => format!(
            "No PYQs found for the requested year(s): {}.",
            years.join(", ")
        ),
        PyqResult::NoneFound => "No PYQs found.".to_string(),
    }
}

fn department_lines(out: &mut String, departments: &[DepartmentEntry]) {
    for d in departments {
        out.push_str(&format!("- **{}**: [Link]({})\n", d.department, d.url));
    }
}

pub fn faculty(result: &FacultyResult) -> String {
    match result {
        FacultyResult::Matched(found) => {
            let mut out =
                String::from("Here is the faculty info for the requested department(s):\n");
            department_lines(&mut out, found);
            out
        }
        FacultyResult::All(all) => {
            let mut out = String::from(
                "Here are all department pages for faculty contacts. Please specify a department (e.g., CSE, ECE) for a direct link:\n",
            );
            department_lines(&mut out, all);
            out
        }
        FacultyResult::Unavailable => "Faculty contact data not available.".to_string(),
    }
}

pub fn holidays(link: Option<&HolidayLink>) -> String {
    match link {
        Some(h) => format!(
            "Here is the **Yearly Holiday List** (PDF):\n- [Holiday List]({})",
            h.url
        ),
        None => "Holiday list not available.".to_string(),
    }
}
