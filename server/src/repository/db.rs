//! Database Connection and Setup
//!
//! Opens the SQLite database and creates one table per list kind.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, ListKind};

/// Shared connection handle
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Connection>>,
}

/// Open (or create) the database at `db_path` and run migrations.
/// `:memory:` gives a private in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

fn run_migrations(conn: &Connection) -> DomainResult<()> {
    for kind in ListKind::ALL {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    text TEXT NOT NULL,
                    favorite INTEGER NOT NULL DEFAULT 0,
                    done INTEGER NOT NULL DEFAULT 0
                )",
                kind.table()
            ),
            (),
        )?;
    }
    Ok(())
}
