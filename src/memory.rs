//! An in-memory stand-in for the remote collection
//!
//! Tests (and offline demos) use this instead of a live server: it implements the same
//! [`TaskService`] contract, assigns ids the way a server would, and can be told to fail
//! on demand so that error paths can be exercised.

use reqwest::StatusCode;
use async_trait::async_trait;

use crate::error::Error;
use crate::task::{NewTask, Task, TaskId};
use crate::traits::TaskService;

/// This stores some behaviour tweaks, that describe how an [`InMemoryService`] will behave during a given test
///
/// So that an operation fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct ServiceFaults {
    pub list_behaviour: (u32, u32),
    pub create_behaviour: (u32, u32),
    pub mark_done_behaviour: (u32, u32),
    pub delete_behaviour: (u32, u32),
}

impl ServiceFaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            list_behaviour: (0, n_fails),
            create_behaviour: (0, n_fails),
            mark_done_behaviour: (0, n_fails),
            delete_behaviour: (0, n_fails),
        }
    }

    pub fn can_list(&mut self) -> Result<(), Error> {
        decrement(&mut self.list_behaviour, "list_tasks")
    }
    pub fn can_create(&mut self) -> Result<(), Error> {
        decrement(&mut self.create_behaviour, "create_task")
    }
    pub fn can_mark_done(&mut self) -> Result<(), Error> {
        decrement(&mut self.mark_done_behaviour, "mark_done")
    }
    pub fn can_delete(&mut self) -> Result<(), Error> {
        decrement(&mut self.delete_behaviour, "delete_task")
    }
}

/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Error> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 = value.0 - 1;
        log::debug!("Service faults: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 = value.1 - 1;
        log::debug!("Service faults: failing a {} ({:?})", descr, value);
        Err(Error::Service(StatusCode::INTERNAL_SERVER_ERROR))
    } else {
        log::debug!("Service faults: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}

/// A [`TaskService`] that stores its tasks in memory.
///
/// Ids are sequential and opaque, like the server-assigned ones. Every request is counted
/// (even the failed ones), so tests can assert that an operation issued no request at all.
#[derive(Default, Debug)]
pub struct InMemoryService {
    tasks: Vec<Task>,
    next_id: u32,
    requests_seen: u32,

    pub faults: ServiceFaults,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many requests this service has received so far, successful or not
    pub fn requests_seen(&self) -> u32 {
        self.requests_seen
    }

    /// Insert a task directly, bypassing the service contract. Useful to pre-populate a test
    pub fn seed(&mut self, title: &str, date: &str, done: bool) -> TaskId {
        let id = self.assign_id();
        self.tasks.push(Task::new_with_parameters(id.clone(), title.to_string(), date.to_string(), done));
        id
    }

    fn assign_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::from(format!("{:06x}", self.next_id))
    }
}

#[async_trait]
impl TaskService for InMemoryService {
    async fn list_tasks(&mut self) -> Result<Vec<Task>, Error> {
        self.requests_seen += 1;
        self.faults.can_list()?;
        Ok(self.tasks.clone())
    }

    async fn create_task(&mut self, new_task: &NewTask) -> Result<(), Error> {
        self.requests_seen += 1;
        self.faults.can_create()?;
        let id = self.assign_id();
        // The `done` flag from the payload is honoured as-is, like the reference backend does
        self.tasks.push(Task::new_with_parameters(id, new_task.title.clone(), new_task.date.clone(), new_task.done));
        Ok(())
    }

    async fn mark_done(&mut self, id: &TaskId) -> Result<(), Error> {
        self.requests_seen += 1;
        self.faults.can_mark_done()?;
        // An unknown id matches nothing; the reference backend still reports success
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.mark_done();
        }
        Ok(())
    }

    async fn delete_task(&mut self, id: &TaskId) -> Result<(), Error> {
        self.requests_seen += 1;
        self.faults.can_delete()?;
        self.tasks.retain(|task| task.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_faults() {
        let mut ok = ServiceFaults::new();
        assert!(ok.can_list().is_ok());
        assert!(ok.can_list().is_ok());
        assert!(ok.can_list().is_ok());

        let mut now = ServiceFaults::fail_now(2);
        assert!(now.can_list().is_err());
        assert!(now.can_create().is_err());
        assert!(now.can_create().is_err());
        assert!(now.can_list().is_err());
        assert!(now.can_list().is_ok());
        assert!(now.can_create().is_ok());

        let mut custom = ServiceFaults {
            list_behaviour: (0, 1),
            create_behaviour: (1, 2),
            ..ServiceFaults::default()
        };
        assert!(custom.can_list().is_err());
        assert!(custom.can_list().is_ok());
        assert!(custom.can_create().is_ok());
        assert!(custom.can_create().is_err());
        assert!(custom.can_create().is_err());
        assert!(custom.can_create().is_ok());
    }

    #[tokio::test]
    async fn ids_are_unique_and_stable() {
        let mut service = InMemoryService::new();
        let id_a = service.seed("A", "2024-01-01", false);
        let id_b = service.seed("B", "2024-01-02", false);
        assert_ne!(id_a, id_b);

        let tasks = service.list_tasks().await.unwrap();
        assert_eq!(tasks[0].id(), &id_a);
        assert_eq!(tasks[1].id(), &id_b);
    }

    #[tokio::test]
    async fn mark_done_on_unknown_id_succeeds() {
        let mut service = InMemoryService::new();
        assert!(service.mark_done(&TaskId::from("nope")).await.is_ok());
    }
}
