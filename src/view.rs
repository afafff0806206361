//! The pure mapping from controller state to what a rendering layer displays
//!
//! No styling or widgets here: just which rows exist, what they say, and which controls
//! are offered. Rendering layers map this 1:1 to their own widgets.

use crate::task::{Task, TaskId};

/// What the list area shows when there is nothing to show
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";

/// One displayable row of the task list
#[derive(Clone, Debug, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub date: String,
    /// Done tasks are rendered struck-through
    pub done: bool,
    /// The "Done" control is only offered for unfinished tasks
    pub can_mark_done: bool,
}

/// The list area: either the empty-state message, or one row per task in fetch order
#[derive(Clone, Debug, PartialEq)]
pub enum TaskListView {
    Empty,
    Rows(Vec<TaskRow>),
}

impl TaskListView {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            return TaskListView::Empty;
        }

        let rows = tasks.iter()
            .map(|task| TaskRow {
                id: task.id().clone(),
                title: task.title().to_string(),
                date: task.date().to_string(),
                done: task.done(),
                can_mark_done: !task.done(),
            })
            .collect();
        TaskListView::Rows(rows)
    }
}

/// The label of the creation form's submit control, which is disabled while `loading` is set
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Adding..." } else { "Add Todo" }
}
