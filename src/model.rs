use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// One record from the todos resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Collection,
    Item,
}

/// What to fetch: a locator plus the shape the body is expected to have.
///
/// The locator may be absolute or relative to the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    url: String,
    shape: Shape,
}

impl ResourceRequest {
    pub fn collection(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            shape: Shape::Collection,
        }
    }

    pub fn item(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            shape: Shape::Item,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_collection(&self) -> bool {
        self.shape == Shape::Collection
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Collection(Vec<Todo>),
    Item(Todo),
}

impl Payload {
    pub fn shape(&self) -> Shape {
        match self {
            Payload::Collection(_) => Shape::Collection,
            Payload::Item(_) => Shape::Item,
        }
    }

    /// Decodes a response body into the shape the request asked for.
    pub fn decode(shape: Shape, body: &[u8]) -> Result<Self, FetchError> {
        Ok(match shape {
            Shape::Collection => Payload::Collection(serde_json::from_slice(body)?),
            Shape::Item => Payload::Item(serde_json::from_slice(body)?),
        })
    }
}

/// Terminal outcome of one retrieval.
pub type FetchResult = Result<Payload, FetchError>;
