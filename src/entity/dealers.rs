use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dealers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_account: i64,
    pub company_name: Option<String>,
    pub address: Option<String>,
    #[sea_orm(unique)]
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::IdAccount",
        to = "super::accounts::Column::Id",
        on_delete = "Cascade"
    )]
    Accounts,
    #[sea_orm(has_many = "super::dealer_cart_items::Entity")]
    DealerCartItems,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::dealer_cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DealerCartItems.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
