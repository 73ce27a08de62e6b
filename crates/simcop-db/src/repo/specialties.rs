use simcop_core::{
    SPECIALTY_CATALOG_TABLE, SPECIALTY_CATEGORY_MAX_LEN, SPECIALTY_CODE_MAX_LEN,
    SPECIALTY_DESCRIPTION_MAX_LEN, SPECIALTY_ID_MAX_LEN, SPECIALTY_NAME_MAX_LEN,
};

use super::prelude::*;
use tracing::{field, instrument, Span};

pub fn create_specialty_catalog_sql() -> String {
    format!(
        r#"
        CREATE TABLE {SPECIALTY_CATALOG_TABLE} (
            id VARCHAR({SPECIALTY_ID_MAX_LEN}) NOT NULL PRIMARY KEY,
            code VARCHAR({SPECIALTY_CODE_MAX_LEN}) NOT NULL UNIQUE,
            name VARCHAR({SPECIALTY_NAME_MAX_LEN}) NOT NULL,
            category VARCHAR({SPECIALTY_CATEGORY_MAX_LEN}) NOT NULL,
            description VARCHAR({SPECIALTY_DESCRIPTION_MAX_LEN})
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
        "#
    )
}

pub struct SpecialtyCatalogRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> SpecialtyCatalogRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(db.system = "mysql", db.operation = "DROP", db.query = "specialty_catalog.drop")
    )]
    pub async fn drop_table(&self) -> Result<(), sqlx_core::Error> {
        query!("DROP TABLE IF EXISTS specialty_catalog")
            .execute(self.pool)
            .await
            .map(|_| ())
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(db.system = "mysql", db.operation = "CREATE", db.query = "specialty_catalog.create")
    )]
    pub async fn create_table(&self) -> Result<(), sqlx_core::Error> {
        let sql = create_specialty_catalog_sql();
        query!(sql.as_str()).execute(self.pool).await.map(|_| ())
    }

    /// Inserts all entries in one transaction; either every row lands or none.
    #[instrument(
        level = "debug",
        skip(self, entries),
        fields(
            db.system = "mysql",
            db.operation = "INSERT",
            db.query = "specialty_catalog.insert_all",
            db.rows = field::Empty
        )
    )]
    pub async fn insert_all(
        &self,
        entries: &[SpecialtyCatalogEntry],
    ) -> Result<u64, sqlx_core::Error> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for entry in entries {
            inserted += query!(
                r#"
                INSERT INTO specialty_catalog (id, code, name, category, description)
                VALUES (?, ?, ?, ?, ?)
                "#,
                entry.id.to_string(),
                entry.code.as_str(),
                entry.name.as_str(),
                entry.category.as_str(),
                entry.description.as_deref()
            )
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;
        Span::current().record("db.rows", inserted);
        Ok(inserted)
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(
            db.system = "mysql",
            db.operation = "SELECT",
            db.query = "specialty_catalog.list",
            db.rows = field::Empty
        )
    )]
    pub async fn list(&self) -> Result<Vec<SpecialtyCatalogEntry>, sqlx_core::Error> {
        let entries = query_as!(
            SpecialtyCatalogEntry,
            r#"
            SELECT id, code, name, category, description
            FROM specialty_catalog
            ORDER BY code ASC
            "#
        )
        .fetch_all(self.pool)
        .await?;
        Span::current().record("db.rows", entries.len());
        Ok(entries)
    }
}
