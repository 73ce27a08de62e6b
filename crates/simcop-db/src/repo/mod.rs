macro_rules! query {
    ($sql:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut q = sqlx_core::query::query::<sqlx_mysql::MySql>($sql);
        $(q = q.bind($arg);)*
        q
    }};
}

macro_rules! query_as {
    ($ty:ty, $sql:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut q = sqlx_core::query_as::query_as::<sqlx_mysql::MySql, $ty>($sql);
        $(q = q.bind($arg);)*
        q
    }};
}

pub(crate) mod prelude {
    pub(crate) use crate::MySqlPool;
    pub(crate) use simcop_core::{
        ColumnDescription, SpecialtyCatalogEntry, StoredPermissions, StoredUser,
    };
    pub(crate) use sqlx_core::row::Row;
}

mod schema;
mod specialties;
mod users;

pub use schema::SchemaRepo;
pub use specialties::{create_specialty_catalog_sql, SpecialtyCatalogRepo};
pub use users::UserRepo;
