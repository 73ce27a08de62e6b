use super::prelude::*;
use tracing::{field, instrument, Span};

pub struct UserRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    // The column may be TEXT or JSON depending on how the table was created;
    // reading it through CAST gives the same text form either way.
    #[instrument(
        level = "debug",
        skip(self),
        fields(db.system = "mysql", db.operation = "SELECT", db.query = "users.get_permissions")
    )]
    pub async fn get_permissions(
        &self,
        username: &str,
    ) -> Result<Option<StoredPermissions>, sqlx_core::Error> {
        let row = query!(
            r#"
            SELECT CAST(permissions AS CHAR) AS permissions
            FROM users
            WHERE username = ?
            "#,
            username
        )
        .fetch_optional(self.pool)
        .await?;
        match row {
            Some(row) => Ok(Some(StoredPermissions {
                raw: row.try_get::<Option<String>, _>("permissions")?,
            })),
            None => Ok(None),
        }
    }

    /// Compare-and-set on the permissions column. The comparison is on bytes,
    /// so a change in case or trailing spaces counts as a change, and `<=>`
    /// lets a NULL column match a NULL expectation.
    #[instrument(
        level = "debug",
        skip(self, expected, permissions),
        fields(
            db.system = "mysql",
            db.operation = "UPDATE",
            db.query = "users.update_permissions",
            db.rows = field::Empty
        )
    )]
    pub async fn update_permissions(
        &self,
        username: &str,
        expected: Option<&str>,
        permissions: &str,
    ) -> Result<u64, sqlx_core::Error> {
        query!(
            r#"
            UPDATE users
            SET permissions = ?
            WHERE username = ?
              AND CAST(CAST(permissions AS CHAR) AS BINARY) <=> CAST(? AS BINARY)
            "#,
            permissions,
            username,
            expected
        )
        .execute(self.pool)
        .await
        .map(|result| {
            Span::current().record("db.rows", result.rows_affected());
            result.rows_affected()
        })
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(db.system = "mysql", db.operation = "SELECT", db.query = "users.get_by_username")
    )]
    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StoredUser>, sqlx_core::Error> {
        query_as!(
            StoredUser,
            r#"
            SELECT
                username,
                role,
                CAST(permissions AS CHAR) AS permissions
            FROM users
            WHERE username = ?
            "#,
            username
        )
        .fetch_optional(self.pool)
        .await
    }
}
