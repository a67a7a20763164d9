use sea_orm::entity::prelude::*;

/// Shared identity and credentials of every admin and dealer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string, never the plain password.
    pub password: String,
    pub enabled: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::admins::Entity")]
    Admins,
    #[sea_orm(has_one = "super::dealers::Entity")]
    Dealers,
}

impl Related<super::admins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admins.def()
    }
}

impl Related<super::dealers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealers.def()
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
