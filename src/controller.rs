//! This module owns the local view of the remote collection
//!
//! It is also responsible for keeping that view consistent across mutations.

use crate::draft::TaskDraft;
use crate::error::Error;
use crate::task::{Task, TaskId};
use crate::traits::TaskService;

/// The authoritative local view of the task collection.
///
/// Every mutation goes through the remote service, then the whole collection is re-fetched:
/// the local list is only ever replaced wholesale with what the server returned, never patched
/// optimistically. A task therefore becomes visible, done, or absent only once a fetch says so.
///
/// All operations return the failure kind when something went wrong (so that callers *can*
/// observe it), but no failure is fatal: the previous state is kept as-is and the next
/// operation is attempted independently. \
/// Rust's exclusive borrows serialize operations on a single controller, so unlike the original
/// browser client there is no way to overlap two mutations here; the `loading` flag is still
/// exposed so a rendering layer can disable its submit control while a creation is in flight.
pub struct TaskListController<S: TaskService> {
    service: S,

    tasks: Vec<Task>,
    draft: TaskDraft,
    loading: bool,
}

impl<S: TaskService> TaskListController<S> {
    /// Create a controller over the given service. The local view starts empty:
    /// run [`Self::fetch_all`] once at startup to populate it
    pub fn new(service: S) -> Self {
        Self {
            service,
            tasks: Vec::new(),
            draft: TaskDraft::new(),
            loading: false,
        }
    }

    /// The current local view of the collection, in fetch-response order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The current content of the creation form
    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Whether a creation is in flight. Rendering layers use this to disable their submit control
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Access the underlying service.
    ///
    /// Apart from tests, there are very few (if any) reasons to bypass the controller this way
    pub fn service(&self) -> &S {
        &self.service
    }
    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    /// The "draft field changed" intents from the form
    pub fn set_draft_title<T: Into<String>>(&mut self, title: T) {
        self.draft.set_title(title);
    }
    pub fn set_draft_date<T: Into<String>>(&mut self, date: T) {
        self.draft.set_date(date);
    }

    /// Re-derive the local view from the server.
    ///
    /// On success the previous list is discarded and replaced atomically. On any failure
    /// (transport, status, malformed payload) the previous list is left untouched
    pub async fn fetch_all(&mut self) -> Result<(), Error> {
        match self.service.list_tasks().await {
            Ok(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            Err(err) => {
                log::warn!("Unable to fetch the task list, keeping the current view: {}", err);
                Err(err)
            }
        }
    }

    /// Create a task from the current draft, then re-fetch the collection.
    ///
    /// If either draft field is empty this is a silent no-op: no request is sent, nothing changes.
    /// The draft is cleared if (and only if) the server acknowledged the creation; on failure it
    /// is kept intact so the user can retry, and no re-fetch happens
    pub async fn create_task(&mut self) -> Result<(), Error> {
        if self.draft.is_ready() == false {
            return Ok(());
        }

        let new_task = self.draft.to_new_task();
        self.loading = true;
        let result = match self.service.create_task(&new_task).await {
            Ok(()) => {
                self.draft.clear();
                self.fetch_all().await
            }
            Err(err) => {
                log::warn!("Unable to create task \"{}\": {}", new_task.title, err);
                Err(err)
            }
        };
        self.loading = false;
        result
    }

    /// Ask the server to mark this task done, then re-fetch the collection.
    ///
    /// The re-fetch happens whether or not the server accepted the update (this asymmetry with
    /// [`Self::create_task`] matches the original client). The task's `done` flag only changes
    /// once the fetched list reflects it
    pub async fn complete_task(&mut self, id: &TaskId) -> Result<(), Error> {
        let outcome = self.service.mark_done(id).await;
        if let Err(err) = &outcome {
            log::warn!("Unable to mark task {} as done: {}", id, err);
        }
        let refresh = self.fetch_all().await;
        outcome.and(refresh)
    }

    /// Ask the server to delete this task, then re-fetch the collection.
    ///
    /// Same unconditional-refresh pattern as [`Self::complete_task`]: the task disappears from
    /// the local view only once the re-fetch no longer returns it
    pub async fn delete_task(&mut self, id: &TaskId) -> Result<(), Error> {
        let outcome = self.service.delete_task(id).await;
        if let Err(err) = &outcome {
            log::warn!("Unable to delete task {}: {}", id, err);
        }
        let refresh = self.fetch_all().await;
        outcome.and(refresh)
    }
}
