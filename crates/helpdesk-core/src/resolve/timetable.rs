//! Single general timetable link; the query text is not filtered on.

use crate::dataset::Dataset;

/// Program label for the general routine link.
pub const GENERAL_TIMETABLE_PROGRAM: &str = "All Class Routines (External Link)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableLink {
    pub program: String,
    pub link: String,
}

/// Zero or one timetable link.
pub fn resolve_timetable(dataset: &Dataset) -> Option<TimetableLink> {
    dataset.timetable_link().map(|link| TimetableLink {
        program: GENERAL_TIMETABLE_PROGRAM.to_string(),
        link: link.to_string(),
    })
}
