//! Item Repository
//!
//! SQLite-backed implementation of [`ListRepository`].

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::DbState;
use super::traits::ListRepository;
use crate::domain::{DomainResult, Item, ItemPatch, ListKind, NewItem};

pub struct SqliteListRepository {
    db: DbState,
}

impl SqliteListRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }
}

/// Ids are row ids rendered as strings; anything else matches nothing.
fn parse_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get::<_, i64>(0)?.to_string(),
        text: row.get(1)?,
        favorite: row.get::<_, i64>(2)? != 0,
        done: row.get::<_, i64>(3)? != 0,
    })
}

fn select_one(conn: &Connection, kind: ListKind, id: i64) -> DomainResult<Option<Item>> {
    let item = conn
        .query_row(
            &format!("SELECT id, text, favorite, done FROM {} WHERE id = ?1", kind.table()),
            params![id],
            row_to_item,
        )
        .optional()?;
    Ok(item)
}

#[async_trait]
impl ListRepository for SqliteListRepository {
    async fn list(&self, kind: ListKind) -> DomainResult<Vec<Item>> {
        let conn = self.db.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT id, text, favorite, done FROM {} ORDER BY id ASC",
            kind.table()
        ))?;
        let items = stmt
            .query_map([], row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    async fn create(&self, kind: ListKind, item: &NewItem) -> DomainResult<Item> {
        item.validate()?;
        let conn = self.db.conn.lock().await;
        conn.execute(
            &format!(
                "INSERT INTO {} (text, favorite, done) VALUES (?1, ?2, ?3)",
                kind.table()
            ),
            params![item.text, item.favorite, item.done],
        )?;
        Ok(Item {
            id: conn.last_insert_rowid().to_string(),
            text: item.text.clone(),
            favorite: item.favorite,
            done: item.done,
        })
    }

    async fn patch(
        &self,
        kind: ListKind,
        id: &str,
        patch: &ItemPatch,
    ) -> DomainResult<Option<Item>> {
        patch.validate()?;
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let conn = self.db.conn.lock().await;
        let changed = conn.execute(
            &format!(
                "UPDATE {} SET
                    text = COALESCE(?1, text),
                    favorite = COALESCE(?2, favorite),
                    done = COALESCE(?3, done)
                 WHERE id = ?4",
                kind.table()
            ),
            params![patch.text, patch.favorite, patch.done, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        select_one(&conn, kind, id)
    }

    async fn delete(&self, kind: ListKind, id: &str) -> DomainResult<bool> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        let conn = self.db.conn.lock().await;
        let removed = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", kind.table()),
            params![id],
        )?;
        Ok(removed > 0)
    }
}
