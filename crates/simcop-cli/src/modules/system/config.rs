use std::fs;
use std::path::Path;
use std::time::Duration;

use simcop_core::AdminError;
use simcop_db::{connect_mysql, MySqlPool};
use tracing::info;
use url::{Host, Url};

use super::args::DbArgs;
use super::types::{DatabaseSection, DbSettings, FileConfig};

pub(crate) const DEFAULT_PORT: u16 = 3306;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub(crate) fn load_config_file(path: &Path) -> anyhow::Result<FileConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        anyhow::anyhow!("failed to read config file {}: {}", path.display(), err)
    })?;
    let config = serde_yaml::from_str(&contents).map_err(|err| {
        anyhow::anyhow!("failed to parse config file {}: {}", path.display(), err)
    })?;
    Ok(config)
}

fn decode_url_part(value: &str) -> anyhow::Result<String> {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .map_err(|err| anyhow::anyhow!("invalid database url: {}", err))
}

pub(crate) fn parse_database_url(raw: &str) -> anyhow::Result<DatabaseSection> {
    let url = Url::parse(raw).map_err(|err| anyhow::anyhow!("invalid database url: {}", err))?;
    if url.scheme() != "mysql" {
        anyhow::bail!("unsupported database url scheme: {}", url.scheme());
    }
    let user = if url.username().is_empty() {
        None
    } else {
        Some(decode_url_part(url.username())?)
    };
    let password = url.password().map(decode_url_part).transpose()?;
    let name = url.path().trim_start_matches('/');
    let name = if name.is_empty() {
        None
    } else {
        Some(decode_url_part(name)?)
    };
    // IPv6 literals come back bracketed from `host_str`; the driver wants the bare address.
    let host = url.host().map(|host| match host {
        Host::Ipv6(addr) => addr.to_string(),
        other => other.to_string(),
    });
    Ok(DatabaseSection {
        host,
        port: url.port(),
        user,
        password,
        name,
        connect_timeout_secs: None,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Resolves connection settings. Flags (or their env vars) beat the
/// database URL, which beats the config file.
pub(crate) fn resolve_db_settings(args: &DbArgs) -> anyhow::Result<DbSettings> {
    let file = match args.config.as_deref() {
        Some(path) => load_config_file(path)?.database,
        None => DatabaseSection::default(),
    };
    let url = args
        .database_url
        .as_deref()
        .map(parse_database_url)
        .transpose()?
        .unwrap_or_default();
    let flags = DatabaseSection {
        host: args.host.clone(),
        port: args.port,
        user: args.user.clone(),
        password: args.password.clone(),
        name: args.database.clone(),
        connect_timeout_secs: args.connect_timeout_secs,
    };
    settings_from_section(file.overlay(url).overlay(flags))
}

pub(crate) fn settings_from_section(section: DatabaseSection) -> anyhow::Result<DbSettings> {
    let host = non_blank(section.host);
    let user = non_blank(section.user);
    let database = non_blank(section.name);

    let mut missing = Vec::new();
    if host.is_none() {
        missing.push("host");
    }
    if user.is_none() {
        missing.push("user");
    }
    if database.is_none() {
        missing.push("database");
    }
    let (Some(host), Some(user), Some(database)) = (host, user, database) else {
        anyhow::bail!(
            "missing database settings: {} (use flags, SIMCOP_* env vars, --database-url or --config)",
            missing.join(", ")
        );
    };

    let timeout_secs = section
        .connect_timeout_secs
        .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        anyhow::bail!("connect timeout must be at least 1 second");
    }

    Ok(DbSettings {
        host: host.trim().to_string(),
        port: section.port.unwrap_or(DEFAULT_PORT),
        user: user.trim().to_string(),
        password: section.password,
        database: database.trim().to_string(),
        connect_timeout: Duration::from_secs(timeout_secs),
    })
}

pub(crate) async fn connect(settings: &DbSettings) -> anyhow::Result<MySqlPool> {
    let pool = connect_mysql(settings.connect_options(), settings.connect_timeout)
        .await
        .map_err(|err| AdminError::Connection(err.to_string()))?;
    info!(
        event = "db_connected",
        host = %settings.host,
        port = settings.port,
        database = %settings.database
    );
    Ok(pool)
}
