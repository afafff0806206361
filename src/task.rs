//! To-do tasks, as served by the remote collection

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The identifier the server assigned to a task.
///
/// This is opaque to the client (the reference backend uses hex object ids, but nothing here depends on that).
/// A task that has not been created on the server yet has no `TaskId` at all, see [`NewTask`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// A to-do task, mirroring one entry of the remote collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The server-assigned identifier
    id: TaskId,

    /// The display name of the task
    title: String,

    /// The due date, transmitted as an ISO-formatted string (e.g. `2024-05-01`).
    /// The server does not validate it beyond presence, so neither do we
    date: String,

    /// Whether this task has been completed. Once true, it never goes back to false
    done: bool,
}

impl Task {
    /// Create a Task instance that is already known to the server.
    ///
    /// Apart from tests and in-memory services, tasks are usually not built by hand:
    /// they are deserialized from fetch responses.
    pub fn new_with_parameters(id: TaskId, title: String, date: String, done: bool) -> Self {
        Self { id, title, date, done }
    }

    pub fn id(&self) -> &TaskId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn date(&self) -> &str  { &self.date  }
    pub fn done(&self) -> bool  { self.done   }

    /// The due date as a calendar date, or `None` when the server sent something unparseable.
    ///
    /// Tasks with an unparseable date are kept anyway, the raw string is still displayable.
    pub fn due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// The creation payload for a task that does not exist on the server yet.
///
/// `done` is always sent (and sent as `false`) because the reference backend expects the full shape.
#[derive(Clone, Debug, Serialize)]
pub struct NewTask {
    pub title: String,
    pub date: String,
    pub done: bool,
}

impl NewTask {
    pub fn new(title: String, date: String) -> Self {
        Self { title, date, done: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_from_wire_shape() {
        let json = r#"{"id":"65a1f2","title":"Pay rent","date":"2024-03-01","done":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id(), &TaskId::from("65a1f2"));
        assert_eq!(task.title(), "Pay rent");
        assert_eq!(task.date(), "2024-03-01");
        assert_eq!(task.done(), false);
    }

    #[test]
    fn serialize_new_task() {
        let new_task = NewTask::new("Buy milk".to_string(), "2024-05-01".to_string());
        let json = serde_json::to_value(&new_task).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Buy milk", "date": "2024-05-01", "done": false}));
    }

    #[test]
    fn due_date_parsing() {
        let task = Task::new_with_parameters(TaskId::from("1"), "A".into(), "2024-05-01".into(), false);
        assert_eq!(task.due_date(), Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));

        let weird = Task::new_with_parameters(TaskId::from("2"), "B".into(), "someday".into(), false);
        assert_eq!(weird.due_date(), None);
    }
}
