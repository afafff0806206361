//! Support for process-wide configuration
//!
//! The only configurable value is the base URL of the collection endpoint. It is supplied by the
//! environment, read once at startup by the embedding binary, and passed into
//! [`Client::new`](crate::client::Client::new); nothing in this crate holds it as a global.

/// The environment variable holding the endpoint base URL (e.g. `http://localhost:8080/todos`)
pub const ENDPOINT_ENV_VAR: &str = "TODO_API_URL";

/// Read the endpoint base URL from the environment.
/// `None` when unset; whether the value parses is only checked by `Client::new`
pub fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV_VAR).ok()
}
