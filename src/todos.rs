//! Todo list service
//!
//! `get_todos` validates what a `TodoSource` returns; the source is the seam
//! tests replace with canned responses instead of reaching the network.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults;
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Status and body of an HTTP response, before any decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Fetches a raw response for a URL
pub trait TodoSource {
    fn fetch(&self, url: &str) -> Result<RawResponse, ServiceError>;
}

/// Fetch and decode the todo list from `source`.
///
/// Anything but HTTP 200 is an error, and so is a payload that is not a JSON
/// array, even if it holds a single valid todo.
pub fn get_todos(source: &impl TodoSource) -> Result<Vec<Todo>, ServiceError> {
    let response = source.fetch(defaults::TODOS_URL)?;
    crate::log::debug!(status = response.status, "todo service responded");

    if response.status != 200 {
        return Err(ServiceError::Http {
            status: response.status,
        });
    }

    let payload: Value = serde_json::from_str(&response.body)?;
    match payload {
        Value::Array(_) => Ok(serde_json::from_value(payload)?),
        other => Err(ServiceError::NotAList {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Real transport over blocking HTTP
#[cfg(feature = "http")]
#[derive(Debug, Default)]
pub struct HttpTodoSource {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTodoSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "http")]
impl TodoSource for HttpTodoSource {
    fn fetch(&self, url: &str) -> Result<RawResponse, ServiceError> {
        let transport = |e: reqwest::Error| ServiceError::Transport {
            message: e.to_string(),
        };
        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport)?;
        Ok(RawResponse { status, body })
    }
}
