//! Item Entity
//!
//! An idea or a feature. Both kinds share one shape and live in separate
//! collections.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// Which collection an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ideas,
    Features,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Ideas, ListKind::Features];

    /// Parse the `<kind>` segment of `/api/<kind>`
    pub fn from_path(s: &str) -> Option<Self> {
        match s {
            "ideas" => Some(ListKind::Ideas),
            "features" => Some(ListKind::Features),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Ideas => "ideas",
            ListKind::Features => "features",
        }
    }

    pub fn table(&self) -> &'static str {
        self.as_str()
    }

    /// Singular display name used in response messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ListKind::Ideas => "Idea",
            ListKind::Features => "Feature",
        }
    }
}

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned on creation; opaque to clients
    pub id: String,
    pub text: String,
    pub favorite: bool,
    pub done: bool,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub text: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
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

    pub fn validate(&self) -> DomainResult<()> {
        validate_text(&self.text)
    }
}

/// Body of a partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub favorite: Option<bool>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl ItemPatch {
    pub fn validate(&self) -> DomainResult<()> {
        match &self.text {
            Some(text) => validate_text(text),
            None => Ok(()),
        }
    }
}

fn validate_text(text: &str) -> DomainResult<()> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidInput("text is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_from_path() {
        assert_eq!(ListKind::from_path("ideas"), Some(ListKind::Ideas));
        assert_eq!(ListKind::from_path("features"), Some(ListKind::Features));
        assert_eq!(ListKind::from_path("bugs"), None);
    }

    #[test]
    fn test_new_item_defaults() {
        let item: NewItem = serde_json::from_str(r#"{"text":"Sketch"}"#).unwrap();
        assert_eq!(item, NewItem::new("Sketch"));
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(NewItem::new("   ").validate().is_err());
        assert!(NewItem::new("ok").validate().is_ok());

        let patch = ItemPatch {
            text: Some("\n".to_string()),
            ..Default::default()
        };
        assert!(matches!(patch.validate(), Err(DomainError::InvalidInput(_))));

        let patch = ItemPatch {
            done: Some(true),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
    }
}
