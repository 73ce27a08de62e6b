use tracing::{info, warn};

use crate::catalog::seed_entries;
use crate::error::{AdminError, AdminResult};
use crate::models::{ColumnDescription, SpecialtyCatalogEntry};
use crate::services::{ProvisionReport, ProvisionStep, SchemaInspector, SpecialtyCatalogStore};

/// Drops `specialty_catalog`, recreates it and inserts the seed rows.
///
/// Whatever the table held before is discarded. `progress` is called before
/// each step so callers can report it.
pub async fn provision_catalog<S, F>(store: &S, mut progress: F) -> AdminResult<ProvisionReport>
where
    S: SpecialtyCatalogStore + ?Sized,
    F: FnMut(ProvisionStep),
{
    progress(ProvisionStep::DroppingTable);
    store.drop_catalog().await?;
    info!(event = "catalog_dropped");

    progress(ProvisionStep::CreatingTable);
    store.create_catalog().await?;
    info!(event = "catalog_created");

    let entries = seed_entries();
    progress(ProvisionStep::Seeding {
        rows: entries.len(),
    });
    let inserted = store.insert_entries(&entries).await?;
    if inserted != entries.len() as u64 {
        warn!(
            event = "catalog_seed_mismatch",
            expected = entries.len(),
            inserted
        );
        return Err(AdminError::storage(
            "catalog_seed_mismatch",
            format!("expected {} rows, inserted {inserted}", entries.len()),
        ));
    }
    info!(event = "catalog_seeded", inserted);

    Ok(ProvisionReport { inserted, entries })
}

pub async fn list_catalog<S>(store: &S) -> AdminResult<Vec<SpecialtyCatalogEntry>>
where
    S: SpecialtyCatalogStore + ?Sized,
{
    store.list_entries().await
}

pub async fn list_tables<S>(inspector: &S) -> AdminResult<Vec<String>>
where
    S: SchemaInspector + ?Sized,
{
    let tables = inspector.list_tables().await?;
    info!(event = "tables_listed", count = tables.len());
    Ok(tables)
}

/// Plain SQL identifier: ASCII letters, digits and underscores only.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

pub async fn describe_table<S>(inspector: &S, table: &str) -> AdminResult<Vec<ColumnDescription>>
where
    S: SchemaInspector + ?Sized,
{
    let table = table.trim();
    if !is_valid_identifier(table) {
        return Err(AdminError::InvalidInput(format!(
            "invalid table name: {table:?}"
        )));
    }
    let columns = inspector.describe_table(table).await?;
    if columns.is_empty() {
        return Err(AdminError::TableNotFound(table.to_string()));
    }
    Ok(columns)
}
