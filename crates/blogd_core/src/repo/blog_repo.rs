//! Blog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `blogs` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Mutating paths report `NotFound` when zero rows match the target id.
//! - `get_blog` reports absence as `Ok(None)`, not as an error; the single
//!   fetch path is the one place absence is not a failure.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::blog::{Blog, BlogDraft, BlogId, BlogPatch};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BLOG_SELECT_SQL: &str = "SELECT id, title, body FROM blogs";

const REQUIRED_COLUMNS: &[&str] = &["id", "title", "body"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for blog persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(BlogId),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "blog not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for blog CRUD operations.
pub trait BlogRepository {
    fn create_blog(&self, draft: &BlogDraft) -> RepoResult<BlogId>;
    fn list_blogs(&self) -> RepoResult<Vec<Blog>>;
    fn get_blog(&self, id: BlogId) -> RepoResult<Option<Blog>>;
    fn replace_blog(&self, id: BlogId, title: Option<&str>, body: Option<&str>) -> RepoResult<()>;
    fn merge_blog(&self, id: BlogId, patch: &BlogPatch) -> RepoResult<()>;
    fn delete_blog(&self, id: BlogId) -> RepoResult<()>;
}

/// SQLite-backed blog repository.
pub struct SqliteBlogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBlogRepository<'conn> {
    /// Wraps a connection that is already known to carry the blog schema.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after verifying the blog schema is in place.
    ///
    /// Intended for process startup; per-request construction can use
    /// [`SqliteBlogRepository::new`] once the handle has been validated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected = latest_version();
        let actual =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual < expected {
            return Err(RepoError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        let table_count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'blogs';",
            [],
            |row| row.get(0),
        )?;
        if table_count == 0 {
            return Err(RepoError::MissingRequiredTable("blogs"));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('blogs');")?;
        let mut rows = stmt.query([])?;
        let mut present = Vec::new();
        while let Some(row) = rows.next()? {
            present.push(row.get::<_, String>(0)?);
        }
        for column in REQUIRED_COLUMNS {
            if !present.iter().any(|name| name == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: "blogs",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }

    fn blog_exists(&self, id: BlogId) -> RepoResult<bool> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM blogs WHERE id = ?1;",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

impl BlogRepository for SqliteBlogRepository<'_> {
    fn create_blog(&self, draft: &BlogDraft) -> RepoResult<BlogId> {
        self.conn.execute(
            "INSERT INTO blogs (title, body) VALUES (?1, ?2);",
            params![draft.title.as_str(), draft.body.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_blogs(&self) -> RepoResult<Vec<Blog>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BLOG_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut blogs = Vec::new();

        while let Some(row) = rows.next()? {
            blogs.push(parse_blog_row(row)?);
        }

        Ok(blogs)
    }

    fn get_blog(&self, id: BlogId) -> RepoResult<Option<Blog>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BLOG_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_blog_row(row)?));
        }

        Ok(None)
    }

    fn replace_blog(&self, id: BlogId, title: Option<&str>, body: Option<&str>) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE blogs SET title = ?1, body = ?2 WHERE id = ?3;",
            params![title, body, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn merge_blog(&self, id: BlogId, patch: &BlogPatch) -> RepoResult<()> {
        let mut assignments: Vec<&str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(title) = &patch.title {
            assignments.push("title = ?");
            bind_values.push(opt_text(title.as_deref()));
        }
        if let Some(body) = &patch.body {
            assignments.push("body = ?");
            bind_values.push(opt_text(body.as_deref()));
        }

        // An empty patch still has to address an existing row.
        if assignments.is_empty() {
            if !self.blog_exists(id)? {
                return Err(RepoError::NotFound(id));
            }
            return Ok(());
        }

        let sql = format!("UPDATE blogs SET {} WHERE id = ?;", assignments.join(", "));
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_blog(&self, id: BlogId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM blogs WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_blog_row(row: &Row<'_>) -> RepoResult<Blog> {
    Ok(Blog {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
    })
}

fn opt_text(value: Option<&str>) -> Value {
    match value {
        Some(text) => Value::Text(text.to_string()),
        None => Value::Null,
    }
}
