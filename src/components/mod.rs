//! UI Components
//!
//! Leptos components for the two list sections.

mod item_row;
mod list_section;
mod new_item_form;

pub use item_row::ItemRow;
pub use list_section::ListSection;
pub use new_item_form::NewItemForm;
