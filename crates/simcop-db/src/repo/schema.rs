use super::prelude::*;
use tracing::{field, instrument, Span};

pub struct SchemaRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> SchemaRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Columns of `table` in the connection's current database.
    #[instrument(
        level = "debug",
        skip(self),
        fields(
            db.system = "mysql",
            db.operation = "SELECT",
            db.query = "schema.describe_table",
            db.rows = field::Empty
        )
    )]
    pub async fn describe_table(
        &self,
        table: &str,
    ) -> Result<Vec<ColumnDescription>, sqlx_core::Error> {
        let columns = query_as!(
            ColumnDescription,
            r#"
            SELECT
                CAST(COLUMN_NAME AS CHAR) AS field,
                CAST(COLUMN_TYPE AS CHAR) AS column_type,
                CAST(IS_NULLABLE AS CHAR) AS is_nullable
            FROM information_schema.COLUMNS
            WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
            ORDER BY ORDINAL_POSITION
            "#,
            table
        )
        .fetch_all(self.pool)
        .await?;
        Span::current().record("db.rows", columns.len());
        Ok(columns)
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(db.system = "mysql", db.operation = "SELECT", db.query = "schema.table_exists")
    )]
    pub async fn table_exists(&self, table: &str) -> Result<bool, sqlx_core::Error> {
        let row = query!(
            r#"
            SELECT 1
            FROM information_schema.TABLES
            WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
            LIMIT 1
            "#,
            table
        )
        .fetch_optional(self.pool)
        .await?;
        Ok(row.is_some())
    }

    /// Base tables and views of the current database, by name.
    #[instrument(
        level = "debug",
        skip(self),
        fields(
            db.system = "mysql",
            db.operation = "SELECT",
            db.query = "schema.list_tables",
            db.rows = field::Empty
        )
    )]
    pub async fn list_tables(&self) -> Result<Vec<String>, sqlx_core::Error> {
        let rows = query!(
            r#"
            SELECT CAST(TABLE_NAME AS CHAR) AS table_name
            FROM information_schema.TABLES
            WHERE TABLE_SCHEMA = DATABASE()
            ORDER BY TABLE_NAME
            "#
        )
        .fetch_all(self.pool)
        .await?;
        let tables = rows
            .iter()
            .map(|row| row.try_get::<String, _>("table_name"))
            .collect::<Result<Vec<_>, _>>()?;
        Span::current().record("db.rows", tables.len());
        Ok(tables)
    }
}
