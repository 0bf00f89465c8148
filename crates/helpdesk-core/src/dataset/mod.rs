//! Reference dataset: category tables loaded once at startup.

mod store;

pub use store::{
    Dataset, DatasetError, DatasetStore, DepartmentEntry, FacultyTable, HolidayTable, LoadStatus,
    PyqEntry, TimetableTable, DEPT_PYQ_KEY,
};
