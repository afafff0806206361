//! This crate keeps a local mirror of a remote to-do collection.
//!
//! It provides an HTTP client for the collection endpoint in the [`client`] module, that can be used as a stand-alone module.
//!
//! Because the server is the only source of truth, this crate never applies optimistic updates: every mutation
//! (create, complete, delete) goes through the remote service, and the local state is then re-derived from a
//! full re-fetch. The [`TaskListController`](controller::TaskListController) owns this state and exposes the
//! operations a rendering layer needs. \
//! The controller is generic over a [`TaskService`](traits::TaskService), so that tests (and offline demos)
//! can swap the real server for an [`InMemoryService`](memory::InMemoryService).

pub mod traits;

mod task;
pub use task::{NewTask, Task, TaskId};
mod draft;
pub use draft::TaskDraft;
mod error;
pub use error::Error;
pub mod controller;
pub use controller::TaskListController;

pub mod client;
pub mod memory;
pub mod view;

pub mod config;
