use sea_orm::entity::prelude::*;

/// A product as it can be placed in a dealer cart.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_of_carts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
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
    #[sea_orm(has_many = "super::dealer_cart_items::Entity")]
    DealerCartItems,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::dealer_cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DealerCartItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
