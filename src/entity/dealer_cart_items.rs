use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Composite identity of a cart row. Two ids with the same components are the
/// same row, so the type is usable directly as a map key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DealerCartItemId {
    pub id_dealer: i64,
    pub id_product_of_cart: i64,
}

impl DealerCartItemId {
    pub fn new(id_dealer: i64, id_product_of_cart: i64) -> Self {
        Self {
            id_dealer,
            id_product_of_cart,
        }
    }
}

impl From<DealerCartItemId> for (i64, i64) {
    fn from(id: DealerCartItemId) -> Self {
        (id.id_dealer, id.id_product_of_cart)
    }
}

impl From<(i64, i64)> for DealerCartItemId {
    fn from((id_dealer, id_product_of_cart): (i64, i64)) -> Self {
        Self::new(id_dealer, id_product_of_cart)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dealer_cart_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_dealer: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_product_of_cart: i64,
    pub quantity: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn key(&self) -> DealerCartItemId {
        DealerCartItemId::new(self.id_dealer, self.id_product_of_cart)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dealers::Entity",
        from = "Column::IdDealer",
        to = "super::dealers::Column::IdAccount"
    )]
    Dealers,
    #[sea_orm(
        belongs_to = "super::product_of_carts::Entity",
        from = "Column::IdProductOfCart",
        to = "super::product_of_carts::Column::Id"
    )]
    ProductOfCarts,
}

impl Related<super::dealers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealers.def()
    }
}

impl Related<super::product_of_carts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductOfCarts.def()
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

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::DealerCartItemId;

    #[test]
    fn equal_components_make_equal_ids() {
        let a = DealerCartItemId::new(7, 42);
        let b: DealerCartItemId = (7, 42).into();
        assert_eq!(a, b);
        assert_ne!(a, DealerCartItemId::new(42, 7));

        let mut rows = HashMap::new();
        rows.insert(a, 1);
        rows.insert(b, 3);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&a], 3);
    }
}
