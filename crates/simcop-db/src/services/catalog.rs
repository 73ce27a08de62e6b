use async_trait::async_trait;
use simcop_core::{
    AdminError, AdminResult, SpecialtyCatalogEntry, SpecialtyCatalogStore,
    SPECIALTY_CATALOG_TABLE,
};

use super::{map_db_error, MySqlAdminStore};
use crate::repo::{SchemaRepo, SpecialtyCatalogRepo};

#[async_trait]
impl<'a> SpecialtyCatalogStore for MySqlAdminStore<'a> {
    async fn drop_catalog(&self) -> AdminResult<()> {
        SpecialtyCatalogRepo::new(self.pool)
            .drop_table()
            .await
            .map_err(|err| map_db_error("catalog_drop_failed", err))
    }

    async fn create_catalog(&self) -> AdminResult<()> {
        SpecialtyCatalogRepo::new(self.pool)
            .create_table()
            .await
            .map_err(|err| map_db_error("catalog_create_failed", err))
    }

    async fn insert_entries(&self, entries: &[SpecialtyCatalogEntry]) -> AdminResult<u64> {
        SpecialtyCatalogRepo::new(self.pool)
            .insert_all(entries)
            .await
            .map_err(|err| map_db_error("catalog_seed_failed", err))
    }

    async fn list_entries(&self) -> AdminResult<Vec<SpecialtyCatalogEntry>> {
        let exists = SchemaRepo::new(self.pool)
            .table_exists(SPECIALTY_CATALOG_TABLE)
            .await
            .map_err(|err| map_db_error("catalog_lookup_failed", err))?;
        if !exists {
            return Err(AdminError::TableNotFound(
                SPECIALTY_CATALOG_TABLE.to_string(),
            ));
        }
        SpecialtyCatalogRepo::new(self.pool)
            .list()
            .await
            .map_err(|err| map_db_error("catalog_list_failed", err))
    }
}
