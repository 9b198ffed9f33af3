//! Table definitions derived from the entities, in foreign-key order.

use crate::entity::prelude::*;
use sea_orm::{
    sea_query::{Table, TableCreateStatement, TableDropStatement},
    ConnectionTrait, DbBackend, DbErr, EntityTrait, Schema,
};

/// Every table of the data model, parents before children.
///
/// Built per backend and handed to whatever needs DDL: the migration crate,
/// test setup, or an application bootstrapping an empty database.
#[derive(Debug)]
pub struct Registry {
    backend: DbBackend,
}

impl Registry {
    pub fn new(backend: DbBackend) -> Self {
        Self { backend }
    }

    pub fn table_names() -> [&'static str; 7] {
        [
            "user",
            "tag",
            "post",
            "comment",
            "product",
            "post_tag",
            "product_tag",
        ]
    }

    pub fn create_table_statements(&self) -> Vec<TableCreateStatement> {
        vec![
            self.create_stmt(User),
            self.create_stmt(Tag),
            self.create_stmt(Post),
            self.create_stmt(Comment),
            self.create_stmt(Product),
            self.create_stmt(PostTag),
            self.create_stmt(ProductTag),
        ]
    }

    /// Children before parents.
    pub fn drop_table_statements(&self) -> Vec<TableDropStatement> {
        vec![
            drop_stmt(ProductTag),
            drop_stmt(PostTag),
            drop_stmt(Product),
            drop_stmt(Comment),
            drop_stmt(Post),
            drop_stmt(Tag),
            drop_stmt(User),
        ]
    }

    #[tracing::instrument(skip_all, fields(backend = ?self.backend))]
    pub async fn create_all<C>(&self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        for stmt in self.create_table_statements() {
            db.execute(self.backend.build(&stmt)).await?;
        }
        tracing::debug!("created {} tables", Self::table_names().len());
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(backend = ?self.backend))]
    pub async fn drop_all<C>(&self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        for stmt in self.drop_table_statements() {
            db.execute(self.backend.build(&stmt)).await?;
        }
        Ok(())
    }

    fn create_stmt<E: EntityTrait>(&self, entity: E) -> TableCreateStatement {
        Schema::new(self.backend)
            .create_table_from_entity(entity)
            .if_not_exists()
            .to_owned()
    }
}

fn drop_stmt<E: EntityTrait>(entity: E) -> TableDropStatement {
    Table::drop().table(entity).if_exists().to_owned()
}
