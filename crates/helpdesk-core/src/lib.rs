//! helpdesk-core: college helpdesk dataset, keyword intent routing, category resolvers and
//! renderers shared by the gateway and chat add-ons.

mod dataset;
mod helpdesk;
mod intent;
pub mod render;
mod resolve;
mod shared;
mod text;

pub use shared::{CoreConfig, DEFAULT_DATA_PATH};

pub use dataset::{
    Dataset, DatasetError, DatasetStore, DepartmentEntry, FacultyTable, HolidayTable, LoadStatus,
    PyqEntry, TimetableTable, DEPT_PYQ_KEY,
};

pub use intent::{classify, Intent, INTENT_KEYWORDS};

pub use resolve::{
    department_matches, pyq_title, resolve_faculty, resolve_holidays, resolve_pyqs,
    resolve_timetable, FacultyResult, HolidayLink, PyqLink, PyqResult, TimetableLink,
    GENERAL_TIMETABLE_PROGRAM, HOLIDAY_LIST_TITLE,
};

pub use text::{extract_years, extract_years_anywhere, normalize, normalize_value};

pub use helpdesk::{ChatMessage, ChatSession, Helpdesk, Role};
