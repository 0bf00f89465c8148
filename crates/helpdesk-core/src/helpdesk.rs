//! Helpdesk: routes a query to its category resolver and renders for the calling surface.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dataset::DatasetStore;
use crate::intent::{classify, Intent};
use crate::render::{structured, text};
use crate::resolve::{
    resolve_faculty, resolve_holidays, resolve_pyqs, resolve_timetable, PyqResult,
};
use crate::text::{extract_years, extract_years_anywhere};

/// Shared, read-only entry point for both surfaces.
#[derive(Debug, Clone)]
pub struct Helpdesk {
    store: Arc<DatasetStore>,
}

impl Helpdesk {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Chat reply for one query. An unavailable dataset short-circuits before classification.
    pub fn chat_reply(&self, query: &str) -> String {
        self.chat_turn(query).1
    }

    /// Like [`Helpdesk::chat_reply`], also returning the routed intent (`None` when the dataset
    /// is unavailable).
    pub fn chat_turn(&self, query: &str) -> (Option<Intent>, String) {
        if self.store.is_unavailable() {
            return (None, text::DATA_UNAVAILABLE.to_string());
        }
        let data = self.store.dataset();
        let intent = classify(query);
        tracing::info!(target: "helpdesk::chat", intent = intent.as_str(), "Routing chat query");
        let reply = match intent {
            Intent::Timetable => text::timetable(resolve_timetable(data).as_ref()),
            Intent::Pyq => text::pyqs(&resolve_pyqs(data, extract_years(query))),
            Intent::Faculty => text::faculty(&resolve_faculty(data, query)),
            Intent::Holiday => text::holidays(resolve_holidays(data).as_ref()),
            Intent::Help => text::HELP_MESSAGE.to_string(),
        };
        (Some(intent), reply)
    }

    pub fn root(&self) -> serde_json::Value {
        structured::root()
    }

    /// Years glued to other characters (`pyq_2023`) still count here. A year filter against an
    /// empty table is the not-found error, not an empty list.
    pub fn pyqs(&self, query: &str) -> serde_json::Value {
        let years = extract_years_anywhere(query);
        let result = match resolve_pyqs(self.store.dataset(), years.clone()) {
            PyqResult::Unavailable if !years.is_empty() => PyqResult::NoneForYears(years),
            other => other,
        };
        structured::pyqs(&result)
    }

    pub fn timetables(&self) -> serde_json::Value {
        structured::timetables(resolve_timetable(self.store.dataset()).as_ref())
    }

    /// Every department page as stored, unfiltered.
    pub fn faculty(&self) -> serde_json::Value {
        structured::faculty(self.store.dataset().department_pages())
    }

    pub fn holidays(&self) -> serde_json::Value {
        structured::holidays(resolve_holidays(self.store.dataset()).as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One interactive conversation. The transcript is display-only; replies never depend on it.
#[derive(Debug, Clone)]
pub struct ChatSession {
    helpdesk: Helpdesk,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(helpdesk: Helpdesk) -> Self {
        Self {
            helpdesk,
            messages: Vec::new(),
        }
    }

    /// Appends the user turn, answers it, appends and returns the reply.
    pub fn ask(&mut self, query: &str) -> String {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: query.to_string(),
        });
        let reply = self.helpdesk.chat_reply(query);
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: reply.clone(),
        });
        reply
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DepartmentEntry, FacultyTable, PyqEntry, DEPT_PYQ_KEY};
    use crate::render::text::{DATA_UNAVAILABLE, HELP_MESSAGE};

    fn fixture() -> Helpdesk {
        let mut data = Dataset::default();
        data.pyqs.insert(
            DEPT_PYQ_KEY.to_string(),
            vec![
                PyqEntry::new("2021", "https://example.edu/pyq/2021"),
                PyqEntry::new("2023", "https://example.edu/pyq/2023"),
                PyqEntry::new("2022", "https://example.edu/pyq/2022"),
            ],
        );
        data.timetables.general_timetable_link = Some("https://example.edu/routine".into());
        data.faculty = FacultyTable::from_entries([
            DepartmentEntry::new("CSE", "https://example.edu/cse"),
            DepartmentEntry::new("ECE", "https://example.edu/ece"),
        ]);
        data.holidays.yearly_list_pdf = Some("https://example.edu/holidays.pdf".into());
        Helpdesk::new(Arc::new(DatasetStore::from_dataset(data)))
    }

    fn unavailable() -> Helpdesk {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::load_or_empty(dir.path().join("data.json"));
        Helpdesk::new(Arc::new(store))
    }

    #[test]
    fn test_chat_routes_each_category() {
        let desk = fixture();
        assert!(desk
            .chat_reply("timetable?")
            .contains("[College Timetable](https://example.edu/routine)"));
        assert!(desk
            .chat_reply("holiday list")
            .contains("[Holiday List](https://example.edu/holidays.pdf)"));
        assert_eq!(desk.chat_reply("hi"), HELP_MESSAGE);
    }

    #[test]
    fn test_chat_pyq_year_filter() {
        let reply = fixture().chat_reply("PYQ for 2021 and 2023");
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Here are the Past Year Question Papers I found:",
                "- [All Subjects PYQs of 2023](https://example.edu/pyq/2023)",
                "- [All Subjects PYQs of 2021](https://example.edu/pyq/2021)",
            ]
        );
    }

    #[test]
    fn test_faculty_filter_differs_between_surfaces() {
        let desk = fixture();
        let reply = desk.chat_reply("tell me about cse faculty");
        assert!(reply.contains("**CSE**"));
        assert!(!reply.contains("**ECE**"));

        let payload = desk.faculty();
        let pages = payload["faculty"]["department_pages"].as_array().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0]["department"], "CSE");
        assert_eq!(pages[1]["department"], "ECE");
    }

    #[test]
    fn test_year_scan_differs_between_surfaces() {
        let desk = fixture();
        let payload = desk.pyqs("pyq_2023");
        let grouped = payload["pyqs"]["DEPTPYQ"].as_object().unwrap();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["2023"][0]["url"], "https://example.edu/pyq/2023");

        let reply = desk.chat_reply("pyq_2023");
        assert_eq!(reply.lines().count(), 4);
        assert!(reply.contains("PYQs of 2021"));
    }

    #[test]
    fn test_api_year_filter_on_empty_table_is_error() {
        let mut data = Dataset::default();
        data.holidays.yearly_list_pdf = Some("https://example.edu/holidays.pdf".into());
        let desk = Helpdesk::new(Arc::new(DatasetStore::from_dataset(data)));
        assert_eq!(
            desk.pyqs("pyq 2023"),
            serde_json::json!({ "error": "No PYQs found for the given year(s)." })
        );
        assert_eq!(desk.pyqs("pyqs"), serde_json::json!({ "pyqs": { "DEPTPYQ": [] } }));
    }

    #[test]
    fn test_timetable_beats_faculty() {
        let reply = fixture().chat_reply("faculty timetable");
        assert!(reply.contains("General Timetable"));
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let desk = fixture();
        for q in ["pyq", "pyq 2022", "faculty ece", "routine", "break", "?"] {
            assert_eq!(desk.chat_reply(q), desk.chat_reply(q));
        }
        assert_eq!(
            serde_json::to_string(&desk.pyqs("2021 2022")).unwrap(),
            serde_json::to_string(&desk.pyqs("2021 2022")).unwrap()
        );
    }

    #[test]
    fn test_unavailable_dataset_answers_every_query_the_same() {
        let desk = unavailable();
        for q in ["timetable", "pyq 2023", "faculty", "holiday", "hello"] {
            assert_eq!(desk.chat_turn(q), (None, DATA_UNAVAILABLE.to_string()));
        }
        assert_eq!(desk.timetables(), serde_json::json!({ "timetables": [] }));
        assert_eq!(desk.holidays(), serde_json::json!({ "holidays": [] }));
        assert_eq!(
            desk.faculty(),
            serde_json::json!({ "faculty": { "department_pages": [] } })
        );
        assert_eq!(desk.pyqs("pyqs"), serde_json::json!({ "pyqs": { "DEPTPYQ": [] } }));
    }

    #[test]
    fn test_session_keeps_transcript() {
        let mut session = ChatSession::new(fixture());
        let reply = session.ask("holidays");
        session.ask("thanks");
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[0].content, "holidays");
        assert_eq!(transcript[1].role, Role::Assistant);
        assert_eq!(transcript[1].content, reply);
        assert_eq!(transcript[3].content, HELP_MESSAGE);
    }
}
