//! Frontend Models
//!
//! Data structures matching the list service wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the list service on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Idea or feature as returned by the list service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub done: bool,
}

/// POST body for a new item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub text: String,
    pub favorite: bool,
    pub done: bool,
}

impl NewItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            favorite: false,
            done: false,
        }
    }
}

/// PATCH body; only the fields that are set get sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl ItemPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Default::default()
        }
    }

    pub fn done(done: bool) -> Self {
        Self {
            done: Some(done),
            ..Default::default()
        }
    }
}

/// The two parallel lists shown side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ideas,
    Features,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Ideas, ListKind::Features];

    /// Path segment under the API base
    pub fn path(&self) -> &'static str {
        match self {
            ListKind::Ideas => "ideas",
            ListKind::Features => "features",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Ideas => "Ideas",
            ListKind::Features => "Features",
        }
    }

    /// Singular noun used in placeholders and messages
    pub fn noun(&self) -> &'static str {
        match self {
            ListKind::Ideas => "idea",
            ListKind::Features => "feature",
        }
    }

    /// Items revealed per "show more" step
    pub fn page_size(&self) -> usize {
        match self {
            ListKind::Ideas => 3,
            ListKind::Features => 5,
        }
    }
}

/// Whitespace-only text is never sent to the service
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
