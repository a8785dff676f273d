//! Thin persistence gateway over sqlx.
//!
//! Every adapter query goes through one of three shapes: read many rows,
//! read at most one row, or execute a write and get a [`WriteAck`] back.
//! The functions are generic over the executor so the same helpers run
//! against the pool or inside an open transaction.
//!
//! Driver errors become `DatabaseError` carrying the driver message. When
//! a UNIQUE index rejects a write, the violated `table.column` is attached
//! as the `unique` detail so repositories can turn it into a conflict.

use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Executor, FromRow, Sqlite};

use crate::domain::foundation::DomainError;
use crate::ports::WriteAck;

/// A parameterized statement with no typed output.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A parameterized statement decoding rows into `O`.
pub type SqliteQueryAs<'q, O> = QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;

const UNIQUE_PREFIX: &str = "UNIQUE constraint failed: ";

/// Runs a query and returns every row, in database order.
pub async fn read_many<'q, 'c, E, O>(
    executor: E,
    query: SqliteQueryAs<'q, O>,
    action: &str,
) -> Result<Vec<O>, DomainError>
where
    E: Executor<'c, Database = Sqlite>,
    O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    query
        .fetch_all(executor)
        .await
        .map_err(|e| classify(action, e))
}

/// Runs a query and returns the first row, if any.
pub async fn read_one<'q, 'c, E, O>(
    executor: E,
    query: SqliteQueryAs<'q, O>,
    action: &str,
) -> Result<Option<O>, DomainError>
where
    E: Executor<'c, Database = Sqlite>,
    O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    query
        .fetch_optional(executor)
        .await
        .map_err(|e| classify(action, e))
}

/// Executes an INSERT, UPDATE or DELETE.
pub async fn write<'q, 'c, E>(
    executor: E,
    query: SqliteQuery<'q>,
    action: &str,
) -> Result<WriteAck, DomainError>
where
    E: Executor<'c, Database = Sqlite>,
{
    let result = query
        .execute(executor)
        .await
        .map_err(|e| classify(action, e))?;

    Ok(WriteAck::new(result.last_insert_rowid(), result.rows_affected()))
}

/// Returns the `table.column` a UNIQUE index rejected, if that is what failed.
pub fn unique_violation(err: &DomainError) -> Option<&str> {
    err.details.get("unique").map(String::as_str)
}

fn classify(action: &str, err: sqlx::Error) -> DomainError {
    let unique = match &err {
        sqlx::Error::Database(db_err) => db_err
            .message()
            .strip_prefix(UNIQUE_PREFIX)
            .map(str::to_string),
        _ => None,
    };

    let domain_err = DomainError::database(action, &err);
    match unique {
        Some(columns) => domain_err.with_detail("unique", columns),
        None => domain_err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::Database;
    use crate::domain::foundation::ErrorCode;

    async fn scratch() -> Database {
        let db = Database::in_memory().await.unwrap();
        write(
            db.pool(),
            sqlx::query("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT NOT NULL UNIQUE)"),
            "create table",
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn write_reports_row_id_and_changes() {
        let db = scratch().await;

        let ack = write(db.pool(), sqlx::query("INSERT INTO t (v) VALUES (?)").bind("a"), "insert")
            .await
            .unwrap();
        assert_eq!(ack, WriteAck::new(1, 1));

        let ack = write(db.pool(), sqlx::query("DELETE FROM t WHERE v = 'zzz'"), "delete")
            .await
            .unwrap();
        assert!(ack.is_noop());
    }

    #[tokio::test]
    async fn reads_return_rows_or_absence() {
        let db = scratch().await;
        for v in ["a", "b"] {
            write(db.pool(), sqlx::query("INSERT INTO t (v) VALUES (?)").bind(v), "insert")
                .await
                .unwrap();
        }

        let rows: Vec<(i64, String)> = read_many(
            db.pool(),
            sqlx::query_as("SELECT id, v FROM t ORDER BY id"),
            "list",
        )
        .await
        .unwrap();
        assert_eq!(rows, vec![(1, "a".to_string()), (2, "b".to_string())]);

        let missing: Option<(i64,)> =
            read_one(db.pool(), sqlx::query_as("SELECT id FROM t WHERE id = 99"), "find")
                .await
                .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn unique_violation_is_tagged_with_column() {
        let db = scratch().await;
        let insert = || sqlx::query("INSERT INTO t (v) VALUES ('dup')");
        write(db.pool(), insert(), "insert").await.unwrap();

        let err = write(db.pool(), insert(), "insert value").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.starts_with("Failed to insert value: "));
        assert_eq!(unique_violation(&err), Some("t.v"));
    }

    #[tokio::test]
    async fn other_failures_carry_no_unique_tag() {
        let db = scratch().await;
        let err = write(db.pool(), sqlx::query("INSERT INTO missing VALUES (1)"), "insert")
            .await
            .unwrap_err();
        assert!(err.message.contains("no such table"));
        assert_eq!(unique_violation(&err), None);
    }
}
