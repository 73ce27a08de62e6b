#[cfg(feature = "mysql")]
use sqlx_core::from_row::FromRow;
#[cfg(feature = "mysql")]
use sqlx_core::row::Row;
#[cfg(feature = "mysql")]
use sqlx_mysql::MySqlRow;
#[cfg(feature = "mysql")]
use uuid::Uuid;

#[cfg(feature = "mysql")]
use super::*;

#[cfg(feature = "mysql")]
fn decode_error(err: impl std::error::Error + Send + Sync + 'static) -> sqlx_core::Error {
    sqlx_core::Error::Decode(Box::new(err))
}

#[cfg(feature = "mysql")]
impl FromRow<'_, MySqlRow> for StoredUser {
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx_core::Error> {
        Ok(Self {
            username: row.try_get("username")?,
            role: row.try_get("role")?,
            permissions: row.try_get("permissions")?,
        })
    }
}

#[cfg(feature = "mysql")]
impl FromRow<'_, MySqlRow> for SpecialtyCatalogEntry {
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx_core::Error> {
        let id: String = row.try_get("id")?;
        let category: String = row.try_get("category")?;
        Ok(Self {
            id: Uuid::parse_str(&id).map_err(decode_error)?,
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            category: category.parse().map_err(decode_error)?,
            description: row.try_get("description")?,
        })
    }
}

#[cfg(feature = "mysql")]
impl FromRow<'_, MySqlRow> for ColumnDescription {
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx_core::Error> {
        let nullable: String = row.try_get("is_nullable")?;
        Ok(Self {
            field: row.try_get("field")?,
            column_type: row.try_get("column_type")?,
            nullable: nullable.eq_ignore_ascii_case("YES"),
        })
    }
}
