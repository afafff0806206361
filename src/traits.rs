use async_trait::async_trait;

use crate::error::Error;
use crate::task::{NewTask, Task, TaskId};

/// The remote collection, as seen by the controller.
///
/// The real implementation is the HTTP [`Client`](crate::client::Client); tests and demos can use
/// an [`InMemoryService`](crate::memory::InMemoryService) instead.
#[async_trait]
pub trait TaskService {
    /// Returns the full current collection, in the order the service chose to return it.
    /// An empty collection is a normal answer, not an error
    async fn list_tasks(&mut self) -> Result<Vec<Task>, Error>;

    /// Creates a task. The service assigns the id; the response body (if any) is not used,
    /// callers re-fetch instead of trusting it
    async fn create_task(&mut self, new_task: &NewTask) -> Result<(), Error>;

    /// Asks the service to flip `done` to true for this task.
    /// The service is authoritative: no id validation happens on this side
    async fn mark_done(&mut self, id: &TaskId) -> Result<(), Error>;

    /// Removes a task from the collection
    async fn delete_task(&mut self, id: &TaskId) -> Result<(), Error>;
}
