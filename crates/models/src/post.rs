use async_graphql::{ID, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

/// A short piece of text stored under an opaque identifier
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject, Serialize, Deserialize)]
pub struct Post {
    pub id: ID,
    pub text: Option<String>,
}

impl Post {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: ID(id.into()),
            text: Some(text.into()),
        }
    }

    // A lookup miss still answers with the requested id
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: ID(id.into()),
            text: None,
        }
    }
}

#[derive(InputObject, Debug, Clone, Deserialize)]
pub struct PostInput {
    pub id: ID,
    pub text: String,
}
