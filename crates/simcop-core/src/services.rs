use async_trait::async_trait;

use crate::error::AdminResult;
use crate::models::{ColumnDescription, SpecialtyCatalogEntry, StoredPermissions, StoredUser};
use crate::permissions::PermissionList;

#[async_trait]
pub trait UserPermissionStore: Send + Sync {
    async fn load_permissions(&self, username: &str) -> AdminResult<Option<StoredPermissions>>;

    /// Writes `permissions` only if the column still holds `expected`.
    /// Returns the number of rows written.
    async fn store_permissions(
        &self,
        username: &str,
        expected: Option<&str>,
        permissions: &str,
    ) -> AdminResult<u64>;

    async fn find_user(&self, username: &str) -> AdminResult<Option<StoredUser>>;
}

#[async_trait]
pub trait SpecialtyCatalogStore: Send + Sync {
    async fn drop_catalog(&self) -> AdminResult<()>;
    async fn create_catalog(&self) -> AdminResult<()>;
    async fn insert_entries(&self, entries: &[SpecialtyCatalogEntry]) -> AdminResult<u64>;
    async fn list_entries(&self) -> AdminResult<Vec<SpecialtyCatalogEntry>>;
}

#[async_trait]
pub trait SchemaInspector: Send + Sync {
    /// Columns of `table` in ordinal order; empty when the table does not exist.
    async fn describe_table(&self, table: &str) -> AdminResult<Vec<ColumnDescription>>;

    /// Table names of the current database, sorted.
    async fn list_tables(&self) -> AdminResult<Vec<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    Granted {
        before: PermissionList,
        after: PermissionList,
    },
    AlreadyPresent {
        permissions: PermissionList,
    },
    UserNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevokeOutcome {
    Revoked {
        before: PermissionList,
        after: PermissionList,
    },
    NotPresent {
        permissions: PermissionList,
    },
    UserNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    DroppingTable,
    CreatingTable,
    Seeding { rows: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub inserted: u64,
    pub entries: Vec<SpecialtyCatalogEntry>,
}
