use sea_orm_migration::{
    prelude::*,
    sea_orm::{EntityTrait, Schema},
};

use crate::entity::{
    Accounts, Admins, Blogs, BulkDiscounts, CategoryBlogs, DealerCartItems, Dealers, Notifies,
    OrderItems, Orders, ProductOfCarts, ProductSerials, Products, Warranties,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Builds the `CREATE TABLE` for an entity in the connected backend's dialect,
/// so unique columns, composite keys and foreign keys come from the entity
/// definitions rather than hand-written SQL.
async fn create_from_entity<E>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .create_table(schema.create_table_from_entity(entity))
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // parents before children
        create_from_entity(manager, &schema, Accounts).await?;
        create_from_entity(manager, &schema, Admins).await?;
        create_from_entity(manager, &schema, Dealers).await?;
        create_from_entity(manager, &schema, CategoryBlogs).await?;
        create_from_entity(manager, &schema, Blogs).await?;
        create_from_entity(manager, &schema, Products).await?;
        create_from_entity(manager, &schema, ProductSerials).await?;
        create_from_entity(manager, &schema, Warranties).await?;
        create_from_entity(manager, &schema, BulkDiscounts).await?;
        create_from_entity(manager, &schema, ProductOfCarts).await?;
        create_from_entity(manager, &schema, DealerCartItems).await?;
        create_from_entity(manager, &schema, Orders).await?;
        create_from_entity(manager, &schema, OrderItems).await?;
        create_from_entity(manager, &schema, Notifies).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifies).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrderItems).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DealerCartItems).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductOfCarts).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BulkDiscounts).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Warranties).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductSerials).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CategoryBlogs).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Dealers).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts).to_owned())
            .await?;
        Ok(())
    }
}
