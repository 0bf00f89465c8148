//! Category resolvers: turn a query plus the dataset into a typed result.
//!
//! Resolvers take `&Dataset` explicitly so they can run against fixtures; rendering lives in
//! [`crate::render`].

mod faculty;
mod holiday;
mod pyq;
mod timetable;

pub use faculty::{department_matches, resolve_faculty, FacultyResult};
pub use holiday::{resolve_holidays, HolidayLink, HOLIDAY_LIST_TITLE};
pub use pyq::{pyq_title, resolve_pyqs, PyqLink, PyqResult};
pub use timetable::{resolve_timetable, TimetableLink, GENERAL_TIMETABLE_PROGRAM};
