pub(crate) mod args;
pub(crate) mod config;
pub(crate) mod types;

pub(crate) use config::{connect, resolve_db_settings};
pub(crate) use types::{CommandContext, DbSettings};
