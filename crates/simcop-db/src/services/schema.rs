use async_trait::async_trait;
use simcop_core::{AdminResult, ColumnDescription, SchemaInspector};

use super::{map_db_error, MySqlAdminStore};
use crate::repo::SchemaRepo;

#[async_trait]
impl<'a> SchemaInspector for MySqlAdminStore<'a> {
    async fn describe_table(&self, table: &str) -> AdminResult<Vec<ColumnDescription>> {
        SchemaRepo::new(self.pool)
            .describe_table(table)
            .await
            .map_err(|err| map_db_error("describe_table_failed", err))
    }

    async fn list_tables(&self) -> AdminResult<Vec<String>> {
        SchemaRepo::new(self.pool)
            .list_tables()
            .await
            .map_err(|err| map_db_error("list_tables_failed", err))
    }
}
