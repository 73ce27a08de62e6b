use simcop_core::AdminError;

use crate::MySqlPool;

mod catalog;
mod schema;
mod users;

/// Store implementations over a MySQL pool, handed to the core operations.
pub struct MySqlAdminStore<'a> {
    pool: &'a MySqlPool,
}

impl<'a> MySqlAdminStore<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }
}

/// Maps a driver error onto the admin taxonomy. `kind` names the failed step.
pub fn map_db_error(kind: &'static str, err: sqlx_core::Error) -> AdminError {
    match err {
        sqlx_core::Error::Io(_)
        | sqlx_core::Error::Tls(_)
        | sqlx_core::Error::PoolTimedOut
        | sqlx_core::Error::PoolClosed => AdminError::Connection(err.to_string()),
        sqlx_core::Error::Decode(source) => AdminError::decode(kind, source.to_string()),
        sqlx_core::Error::ColumnDecode { index, source } => {
            AdminError::decode(kind, format!("column {index}: {source}"))
        }
        other => AdminError::storage(kind, other.to_string()),
    }
}
