use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(32))",
    enum_name = "product_serial_status"
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSerialStatus {
    #[sea_orm(string_value = "IN_STOCK")]
    InStock,
    #[sea_orm(string_value = "ALLOCATED_TO_DEALER")]
    AllocatedToDealer,
    #[sea_orm(string_value = "ASSIGNED_TO_ORDER_ITEM")]
    AssignedToOrderItem,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_serials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub serial: String,
    pub status: ProductSerialStatus,
    pub id_product: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::IdProduct",
        to = "super::products::Column::Id"
    )]
    Products,
    #[sea_orm(has_one = "super::warranties::Entity")]
    Warranties,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::warranties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warranties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
