use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(32))",
    enum_name = "publish_status"
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishStatus {
    #[sea_orm(string_value = "PUBLISHED")]
    Published,
    #[sea_orm(string_value = "UNPUBLISHED")]
    Unpublished,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub sku: String,
    pub name: String,
    pub short_description: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub image: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub descriptions: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub videos: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub specifications: Option<Json>,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub retail_price: Decimal,
    pub show_on_homepage: bool,
    pub is_featured: bool,
    pub is_deleted: bool,
    pub publish_status: PublishStatus,
    pub stock: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_serials::Entity")]
    ProductSerials,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
    #[sea_orm(has_many = "super::product_of_carts::Entity")]
    ProductOfCarts,
    #[sea_orm(has_many = "super::bulk_discounts::Entity")]
    BulkDiscounts,
}

impl Related<super::product_serials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductSerials.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::product_of_carts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductOfCarts.def()
    }
}

impl Related<super::bulk_discounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BulkDiscounts.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        super::stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}
