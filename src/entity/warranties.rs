use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "warranties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub warranty_code: String,
    pub status: String,
    // column name carries a historical typo that existing databases depend on
    #[sea_orm(column_name = "puchase_date")]
    pub purchase_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub id_product_serial: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_serials::Entity",
        from = "Column::IdProductSerial",
        to = "super::product_serials::Column::Id"
    )]
    ProductSerials,
}

impl Related<super::product_serials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductSerials.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        super::stamp_created(&mut self.created_at, insert);
        Ok(self)
    }
}
