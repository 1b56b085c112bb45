//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod item_repo;
mod traits;


pub use db::{init_db, DbState};
pub use item_repo::SqliteListRepository;
pub use traits::ListRepository;
