use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::SpecialtyCategory;
use crate::error::{AdminError, AdminResult};
use crate::permissions::PermissionList;

/// `users.permissions` exactly as read, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPermissions {
    pub raw: Option<String>,
}

/// A `users` row as read, permissions still in their column form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub username: String,
    pub role: String,
    pub permissions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub role: String,
    pub permissions: PermissionList,
}

impl UserRecord {
    pub fn from_stored(stored: StoredUser) -> AdminResult<Self> {
        let permissions =
            PermissionList::decode(stored.permissions.as_deref()).map_err(|source| {
                AdminError::PermissionDecode {
                    username: stored.username.clone(),
                    source,
                }
            })?;
        Ok(Self {
            username: stored.username,
            role: stored.role,
            permissions,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyCatalogEntry {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub category: SpecialtyCategory,
    pub description: Option<String>,
}

/// One column as reported by `information_schema.COLUMNS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescription {
    pub field: String,
    pub column_type: String,
    pub nullable: bool,
}
