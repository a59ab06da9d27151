use serde::{Deserialize, Serialize};

/// A blog-post identifier as stored on disk.
///
/// The store format allows IDs as either JSON numbers or numeric strings.
/// Untagged deserialization keeps whichever form a record was written with,
/// so records that survive a delete round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl PostId {
    /// Normalize this ID to numeric form for equality checks.
    ///
    /// Non-numeric text yields `None`, which compares equal to no ID.
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            PostId::Number(n) => Some(*n),
            PostId::Text(s) => coerce_id(s),
        }
    }

    /// Whether this ID numerically equals the coerced target.
    ///
    /// A `None` on either side matches nothing, so a record with a
    /// non-parseable ID is never deleted and a non-numeric request deletes
    /// nothing.
    pub fn matches(&self, target: Option<i64>) -> bool {
        match (self.as_numeric(), target) {
            (Some(stored), Some(requested)) => stored == requested,
            _ => false,
        }
    }
}

/// Parse a decimal-integer ID out of path-parameter text.
///
/// Both sides of every ID comparison go through this one function.
pub fn coerce_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// One blog-post entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// The whole store document: an ordered list of posts under `resources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    pub resources: Vec<Post>,
}
