//! JSON-backed reference dataset, read once and held immutable.
//!
//! ## Category tables
//!
//! | Key          | Shape                                                   |
//! |--------------|---------------------------------------------------------|
//! | `pyqs`       | `{ "deptpyq": [ { "year", "url" }, ... ] }`             |
//! | `timetables` | `{ "general_timetable_link": "..." }`                   |
//! | `faculty`    | `{ "department_pages": [ { "department", "url" } ] }`   |
//! | `holidays`   | `{ "yearly_list_pdf": "..." }`                          |
//!
//! Every field may be absent; absent or wrongly typed reads as empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key of the single department table under `pyqs`.
pub const DEPT_PYQ_KEY: &str = "deptpyq";

/// Errors raised while reading the dataset file. They never cross
/// [`DatasetStore::load_or_empty`].
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file '{}' not found", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read dataset file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error decoding JSON from '{}': {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One past-paper link. Entries without both fields are ignored by the resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyqEntry {
    #[serde(default, deserialize_with = "string_or_none")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,
}

impl PyqEntry {
    pub fn new(year: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            url: Some(url.into()),
        }
    }

    /// `(year, url)` when both are present and non-empty.
    pub fn parts(&self) -> Option<(&str, &str)> {
        let year = self.year.as_deref().filter(|s| !s.is_empty())?;
        let url = self.url.as_deref().filter(|s| !s.is_empty())?;
        Some((year, url))
    }
}

/// Typed view of one faculty department page. The table itself keeps the stored JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentEntry {
    pub department: String,
    pub url: String,
}

impl DepartmentEntry {
    pub fn new(department: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            url: url.into(),
        }
    }

    /// Reads a stored page; `None` unless both `department` and `url` are non-empty strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        let department = value.get("department")?.as_str().filter(|s| !s.is_empty())?;
        let url = value.get("url")?.as_str().filter(|s| !s.is_empty())?;
        Some(Self::new(department, url))
    }
}

impl From<DepartmentEntry> for Value {
    fn from(entry: DepartmentEntry) -> Self {
        serde_json::json!({ "department": entry.department, "url": entry.url })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableTable {
    #[serde(default, deserialize_with = "string_or_none")]
    pub general_timetable_link: Option<String>,
}

/// Department pages exactly as stored, including incomplete ones and extra fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyTable {
    #[serde(default, deserialize_with = "lenient")]
    pub department_pages: Vec<Value>,
}

impl FacultyTable {
    pub fn from_entries(entries: impl IntoIterator<Item = DepartmentEntry>) -> Self {
        Self {
            department_pages: entries.into_iter().map(Value::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayTable {
    #[serde(default, deserialize_with = "string_or_none")]
    pub yearly_list_pdf: Option<String>,
}

/// The whole reference corpus. `Dataset::default()` is the all-empty degraded form.
///
/// Decoding is per entry: a wrongly typed field, list element or table reads as absent
/// instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "pyq_tables")]
    pub pyqs: BTreeMap<String, Vec<PyqEntry>>,
    #[serde(default, deserialize_with = "lenient")]
    pub timetables: TimetableTable,
    #[serde(default, deserialize_with = "lenient")]
    pub faculty: FacultyTable,
    #[serde(default, deserialize_with = "lenient")]
    pub holidays: HolidayTable,
}

impl Dataset {
    /// Parses a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// PYQ entries for the department table, in file order.
    pub fn dept_pyqs(&self) -> &[PyqEntry] {
        self.pyqs
            .get(DEPT_PYQ_KEY)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn timetable_link(&self) -> Option<&str> {
        non_empty(self.timetables.general_timetable_link.as_deref())
    }

    /// Stored department pages, unfiltered.
    pub fn department_pages(&self) -> &[Value] {
        &self.faculty.department_pages
    }

    /// Department pages with a name and a link, in file order.
    pub fn departments(&self) -> Vec<DepartmentEntry> {
        self.faculty
            .department_pages
            .iter()
            .filter_map(DepartmentEntry::from_value)
            .collect()
    }

    pub fn holiday_pdf(&self) -> Option<&str> {
        non_empty(self.holidays.yearly_list_pdf.as_deref())
    }

    /// True when no category carries any data.
    pub fn is_empty(&self) -> bool {
        self.pyqs.values().all(Vec::is_empty)
            && self.timetable_link().is_none()
            && self.faculty.department_pages.is_empty()
            && self.holiday_pdf().is_none()
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Non-list tables read as empty; non-object entries stay in place as invalid entries.
fn pyq_tables<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<PyqEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(tables) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(tables
        .into_iter()
        .map(|(key, table)| {
            let entries = match table {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| serde_json::from_value(item).unwrap_or_default())
                    .collect(),
                _ => Vec::new(),
            };
            (key, entries)
        })
        .collect())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Outcome of the startup load, kept for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loaded,
    Missing,
    Malformed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Missing => "missing",
            Self::Malformed => "malformed",
        }
    }
}

/// Loaded dataset plus how the load went. Read-only after construction.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    dataset: Dataset,
    status: LoadStatus,
    load_error: Option<String>,
}

impl DatasetStore {
    /// Wraps an in-memory dataset (fixtures, embedding).
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            status: LoadStatus::Loaded,
            load_error: None,
        }
    }

    /// Reads and parses the dataset file at `path`.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DatasetError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                DatasetError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let dataset = Dataset::from_json_str(&text).map_err(|source| DatasetError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_dataset(dataset))
    }

    /// Best-effort load: any failure is logged and replaced by the all-empty dataset.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::open_path(path) {
            Ok(store) => {
                tracing::info!(
                    target: "helpdesk::dataset",
                    path = %path.display(),
                    pyqs = store.dataset.dept_pyqs().len(),
                    departments = store.dataset.department_pages().len(),
                    "Dataset loaded"
                );
                store
            }
            Err(e) => {
                tracing::warn!(target: "helpdesk::dataset", "{}; serving empty dataset", e);
                let status = match e {
                    DatasetError::Malformed { .. } => LoadStatus::Malformed,
                    DatasetError::Missing { .. } | DatasetError::Read { .. } => LoadStatus::Missing,
                };
                Self {
                    dataset: Dataset::default(),
                    status,
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Human-readable load failure, if any.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// True when the load failed or produced no data at all.
    pub fn is_unavailable(&self) -> bool {
        self.status != LoadStatus::Loaded || self.dataset.is_empty()
    }
}
