use bazaar::schema::Registry;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let registry = Registry::new(manager.get_database_backend());

        for stmt in registry.create_table_statements() {
            manager.create_table(stmt).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let registry = Registry::new(manager.get_database_backend());

        for stmt in registry.drop_table_statements() {
            manager.drop_table(stmt).await?;
        }

        Ok(())
    }
}
