//! This module provides a client to connect to the remote collection endpoint
//!
//! The endpoint is a plain JSON-over-HTTP resource:
//! * `GET <base>` returns the full collection (a JSON array of tasks, or `null` when empty),
//! * `POST <base>` creates a task,
//! * `PUT <base>/<id>` marks a task done,
//! * `DELETE <base>/<id>` removes it.

use async_trait::async_trait;
use url::Url;

use crate::error::Error;
use crate::task::{NewTask, Task, TaskId};
use crate::traits::TaskService;

/// A [`TaskService`] that fetches its data from the remote collection endpoint
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, Error> {
        let base_url = Url::parse(base_url.as_ref())?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL addressing a single task: the base, a slash, the raw id
    fn item_url(&self, id: &TaskId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Interpret a successful GET body as a collection.
/// The reference backend answers `null` (or nothing at all) for an empty collection
fn parse_list_body(text: &str) -> Result<Vec<Task>, Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let tasks: Option<Vec<Task>> = serde_json::from_str(text)?;
    Ok(tasks.unwrap_or_default())
}

#[async_trait]
impl TaskService for Client {
    async fn list_tasks(&mut self) -> Result<Vec<Task>, Error> {
        let response = self.http
            .get(self.base_url.clone())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() == false {
            return Err(Error::Service(status));
        }

        let text = response.text().await?;
        parse_list_body(&text)
    }

    async fn create_task(&mut self, new_task: &NewTask) -> Result<(), Error> {
        let response = self.http
            .post(self.base_url.clone())
            .json(new_task)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() == false {
            return Err(Error::Service(status));
        }

        // The response body (an insertion receipt) is deliberately not consumed:
        // the caller re-fetches the collection instead
        Ok(())
    }

    async fn mark_done(&mut self, id: &TaskId) -> Result<(), Error> {
        let response = self.http
            .put(self.item_url(id))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() == false {
            return Err(Error::Service(status));
        }

        Ok(())
    }

    async fn delete_task(&mut self, id: &TaskId) -> Result<(), Error> {
        let response = self.http
            .delete(self.item_url(id))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() == false {
            return Err(Error::Service(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let result = Client::new("not a url");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn item_url_appends_the_raw_id() {
        let client = Client::new("http://localhost:8080/todos").unwrap();
        let url = client.item_url(&TaskId::from("65a1f2"));
        assert_eq!(url, "http://localhost:8080/todos/65a1f2");
    }

    #[test]
    fn empty_and_null_bodies_are_an_empty_collection() {
        assert_eq!(parse_list_body("").unwrap(), Vec::new());
        assert_eq!(parse_list_body("  \n").unwrap(), Vec::new());
        assert_eq!(parse_list_body("null").unwrap(), Vec::new());
        assert_eq!(parse_list_body("[]").unwrap(), Vec::new());
    }

    #[test]
    fn populated_bodies_keep_response_order() {
        let body = r#"[
            {"id":"2","title":"Buy milk","date":"2024-05-01","done":false},
            {"id":"1","title":"Pay rent","date":"2024-03-01","done":true}
        ]"#;
        let tasks = parse_list_body(body).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id(), &TaskId::from("2"));
        assert_eq!(tasks[1].title(), "Pay rent");
        assert_eq!(tasks[1].done(), true);
    }

    #[test]
    fn unparseable_bodies_are_a_malformed_response() {
        let result = parse_list_body("{\"error\":\"oops\"}");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));

        let result = parse_list_body("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }
}
