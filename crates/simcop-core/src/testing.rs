use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AdminError, AdminResult};
use crate::models::{ColumnDescription, SpecialtyCatalogEntry, StoredPermissions, StoredUser};
use crate::services::{SchemaInspector, SpecialtyCatalogStore, UserPermissionStore};

#[derive(Default)]
pub(crate) struct MemoryUsers {
    rows: Mutex<HashMap<String, StoredUser>>,
    writes: AtomicUsize,
    // Swapped into the row right after the next read, as another writer would.
    interference: Mutex<Option<Option<String>>>,
}

impl MemoryUsers {
    pub(crate) fn with_user(username: &str, role: &str, permissions: Option<&str>) -> Self {
        let store = Self::default();
        store.insert(username, role, permissions);
        store
    }

    pub(crate) fn insert(&self, username: &str, role: &str, permissions: Option<&str>) {
        self.rows.lock().expect("rows lock").insert(
            username.to_string(),
            StoredUser {
                username: username.to_string(),
                role: role.to_string(),
                permissions: permissions.map(str::to_string),
            },
        );
    }

    pub(crate) fn raw_permissions(&self, username: &str) -> Option<String> {
        self.rows
            .lock()
            .expect("rows lock")
            .get(username)
            .and_then(|row| row.permissions.clone())
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn interfere_after_read(&self, permissions: Option<&str>) {
        *self.interference.lock().expect("interference lock") =
            Some(permissions.map(str::to_string));
    }
}

#[async_trait]
impl UserPermissionStore for MemoryUsers {
    async fn load_permissions(&self, username: &str) -> AdminResult<Option<StoredPermissions>> {
        let mut rows = self.rows.lock().expect("rows lock");
        let Some(row) = rows.get_mut(username) else {
            return Ok(None);
        };
        let loaded = StoredPermissions {
            raw: row.permissions.clone(),
        };
        if let Some(next) = self.interference.lock().expect("interference lock").take() {
            row.permissions = next;
        }
        Ok(Some(loaded))
    }

    async fn store_permissions(
        &self,
        username: &str,
        expected: Option<&str>,
        permissions: &str,
    ) -> AdminResult<u64> {
        let mut rows = self.rows.lock().expect("rows lock");
        match rows.get_mut(username) {
            Some(row) if row.permissions.as_deref() == expected => {
                row.permissions = Some(permissions.to_string());
                self.writes.fetch_add(1, Ordering::SeqCst);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn find_user(&self, username: &str) -> AdminResult<Option<StoredUser>> {
        Ok(self.rows.lock().expect("rows lock").get(username).cloned())
    }
}

#[derive(Default)]
pub(crate) struct MemoryCatalog {
    table: Mutex<Option<Vec<SpecialtyCatalogEntry>>>,
    fail_inserts: bool,
    // Keeps all but the last row of each insert batch.
    drop_last_insert: bool,
}

impl MemoryCatalog {
    pub(crate) fn with_rows(rows: Vec<SpecialtyCatalogEntry>) -> Self {
        Self {
            table: Mutex::new(Some(rows)),
            ..Self::default()
        }
    }

    pub(crate) fn failing_inserts() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub(crate) fn short_inserts() -> Self {
        Self {
            drop_last_insert: true,
            ..Self::default()
        }
    }

    pub(crate) fn rows(&self) -> Option<Vec<SpecialtyCatalogEntry>> {
        self.table.lock().expect("table lock").clone()
    }
}

#[async_trait]
impl SpecialtyCatalogStore for MemoryCatalog {
    async fn drop_catalog(&self) -> AdminResult<()> {
        *self.table.lock().expect("table lock") = None;
        Ok(())
    }

    async fn create_catalog(&self) -> AdminResult<()> {
        let mut table = self.table.lock().expect("table lock");
        if table.is_some() {
            return Err(AdminError::storage("create_failed", "table already exists"));
        }
        *table = Some(Vec::new());
        Ok(())
    }

    async fn insert_entries(&self, entries: &[SpecialtyCatalogEntry]) -> AdminResult<u64> {
        if self.fail_inserts {
            return Err(AdminError::storage("insert_failed", "simulated failure"));
        }
        let mut table = self.table.lock().expect("table lock");
        let rows = table
            .as_mut()
            .ok_or_else(|| AdminError::TableNotFound("specialty_catalog".to_string()))?;
        let kept = if self.drop_last_insert {
            &entries[..entries.len().saturating_sub(1)]
        } else {
            entries
        };
        for entry in kept {
            if rows.iter().any(|row| row.code == entry.code) {
                return Err(AdminError::storage("insert_failed", "duplicate code"));
            }
            rows.push(entry.clone());
        }
        Ok(kept.len() as u64)
    }

    async fn list_entries(&self) -> AdminResult<Vec<SpecialtyCatalogEntry>> {
        let table = self.table.lock().expect("table lock");
        let mut rows = table
            .clone()
            .ok_or_else(|| AdminError::TableNotFound("specialty_catalog".to_string()))?;
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }
}

#[derive(Default)]
pub(crate) struct MemorySchema {
    pub(crate) tables: HashMap<String, Vec<ColumnDescription>>,
}

#[async_trait]
impl SchemaInspector for MemorySchema {
    async fn describe_table(&self, table: &str) -> AdminResult<Vec<ColumnDescription>> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }

    async fn list_tables(&self) -> AdminResult<Vec<String>> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
