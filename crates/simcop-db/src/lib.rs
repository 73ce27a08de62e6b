#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]

use std::time::Duration;

use sqlx_core::pool::{Pool, PoolOptions};
use sqlx_mysql::MySql;

pub use sqlx_mysql::MySqlConnectOptions;

pub mod repo;
pub mod services;

pub use services::MySqlAdminStore;

pub type MySqlPool = Pool<MySql>;

/// Opens the single connection an admin command runs on.
pub async fn connect_mysql(
    options: MySqlConnectOptions,
    acquire_timeout: Duration,
) -> Result<MySqlPool, sqlx_core::Error> {
    PoolOptions::new()
        .max_connections(1)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}
