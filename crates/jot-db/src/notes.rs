//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use jot_core::{
    new_v7, Category, CreateNoteRequest, Error, ListNotesRequest, ListNotesResponse, Note,
    NoteFilter, NoteRepository, Result, UpdateNoteRequest,
};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

const NOTE_COLUMNS: &str =
    "id, title, content, category, archived, created_at_utc, updated_at_utc";

/// Build the WHERE clause for the list filter.
fn build_filter_clause(filter: NoteFilter) -> &'static str {
    match filter {
        NoteFilter::Active => "WHERE archived = false",
        NoteFilter::Archived => "WHERE archived = true",
        NoteFilter::All => "",
    }
}

/// Map a database row to a Note.
fn map_row_to_note(row: sqlx::postgres::PgRow) -> Result<Note> {
    let category_str: String = row.get("category");
    let category = category_str.parse::<Category>().map_err(|_| {
        // The CHECK constraint makes this unreachable short of schema drift.
        Error::Internal(format!("invalid category in store: {}", category_str))
    })?;

    Ok(Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        category,
        archived: row.get("archived"),
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    })
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Uuid> {
        req.validate()?;

        let id = new_v7();
        let now = Utc::now();
        let title = req.title.unwrap_or_default();
        let category = req.category.unwrap_or_default();

        sqlx::query(
            "INSERT INTO note (id, title, content, category, archived, created_at_utc, updated_at_utc)
             VALUES ($1, $2, $3, $4, false, $5, $5)",
        )
        .bind(id)
        .bind(&title)
        .bind(&req.content)
        .bind(category.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            op = "insert",
            note_id = %id,
            category = category.as_str(),
            "Note inserted"
        );
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        let row = sqlx::query(&format!("SELECT {} FROM note WHERE id = $1", NOTE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::NoteNotFound(id))?;

        map_row_to_note(row)
    }

    async fn list(&self, req: ListNotesRequest) -> Result<ListNotesResponse> {
        let filter_clause = build_filter_clause(req.filter);

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM note {}", filter_clause))
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)?;

        let mut query = format!(
            "SELECT {} FROM note {} ORDER BY created_at_utc DESC",
            NOTE_COLUMNS, filter_clause
        );
        let mut param_idx = 1;
        if req.limit.is_some() {
            query.push_str(&format!(" LIMIT ${}", param_idx));
            param_idx += 1;
        }
        if req.offset.is_some() {
            query.push_str(&format!(" OFFSET ${}", param_idx));
        }

        let mut q = sqlx::query(&query);
        if let Some(limit) = req.limit {
            q = q.bind(limit);
        }
        if let Some(offset) = req.offset {
            q = q.bind(offset);
        }

        let rows = q.fetch_all(&self.pool).await.map_err(Error::Database)?;
        let notes = rows
            .into_iter()
            .map(map_row_to_note)
            .collect::<Result<Vec<_>>>()?;

        Ok(ListNotesResponse { notes, total })
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()> {
        req.validate()?;

        // Check existence first so an unknown id is a NotFound, not a no-op
        if !self.exists(id).await? {
            return Err(Error::NoteNotFound(id));
        }

        if req.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        // $1 = now, $2 = id, then dynamic params start at $3
        let mut updates: Vec<String> = vec!["updated_at_utc = $1".to_string()];
        let mut param_idx = 3;

        if req.title.is_some() {
            updates.push(format!("title = ${}", param_idx));
            param_idx += 1;
        }
        if req.content.is_some() {
            updates.push(format!("content = ${}", param_idx));
            param_idx += 1;
        }
        if req.category.is_some() {
            updates.push(format!("category = ${}", param_idx));
            param_idx += 1;
        }
        if req.archived.is_some() {
            updates.push(format!("archived = ${}", param_idx));
        }

        let query = format!("UPDATE note SET {} WHERE id = $2", updates.join(", "));

        let mut q = sqlx::query(&query).bind(now).bind(id);
        if let Some(title) = req.title {
            q = q.bind(title);
        }
        if let Some(content) = req.content {
            q = q.bind(content);
        }
        if let Some(category) = req.category {
            q = q.bind(category.as_str());
        }
        if let Some(archived) = req.archived {
            q = q.bind(archived);
        }

        q.execute(&self.pool).await.map_err(Error::Database)?;

        debug!(subsystem = "database", op = "update", note_id = %id, "Note updated");
        Ok(())
    }

    async fn set_archived(&self, id: Uuid, archived: bool) -> Result<()> {
        let result = sqlx::query(
            "UPDATE note SET archived = $3, updated_at_utc = $1 WHERE id = $2",
        )
        .bind(Utc::now())
        .bind(id)
        .bind(archived)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        debug!(
            subsystem = "database",
            op = "set_archived",
            note_id = %id,
            archived,
            "Archive flag updated"
        );
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        debug!(subsystem = "database", op = "delete", note_id = %id, "Note deleted");
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM note WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(exists)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_filter_clause_active() {
        assert_eq!(
            build_filter_clause(NoteFilter::Active),
            "WHERE archived = false"
        );
    }

    #[test]
    fn test_filter_clause_archived() {
        assert_eq!(
            build_filter_clause(NoteFilter::Archived),
            "WHERE archived = true"
        );
    }

    #[test]
    fn test_filter_clause_all_is_unfiltered() {
        assert_eq!(build_filter_clause(NoteFilter::All), "");
    }
}
