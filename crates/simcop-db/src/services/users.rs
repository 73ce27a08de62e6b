use async_trait::async_trait;
use simcop_core::{AdminResult, StoredPermissions, StoredUser, UserPermissionStore};

use super::{map_db_error, MySqlAdminStore};
use crate::repo::UserRepo;

#[async_trait]
impl<'a> UserPermissionStore for MySqlAdminStore<'a> {
    async fn load_permissions(&self, username: &str) -> AdminResult<Option<StoredPermissions>> {
        UserRepo::new(self.pool)
            .get_permissions(username)
            .await
            .map_err(|err| map_db_error("permissions_lookup_failed", err))
    }

    async fn store_permissions(
        &self,
        username: &str,
        expected: Option<&str>,
        permissions: &str,
    ) -> AdminResult<u64> {
        UserRepo::new(self.pool)
            .update_permissions(username, expected, permissions)
            .await
            .map_err(|err| map_db_error("permissions_update_failed", err))
    }

    async fn find_user(&self, username: &str) -> AdminResult<Option<StoredUser>> {
        UserRepo::new(self.pool)
            .get_by_username(username)
            .await
            .map_err(|err| map_db_error("user_lookup_failed", err))
    }
}
