use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub image: Option<Json>,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub introduction: Option<Json>,
    pub show_on_homepage: bool,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub id_category_blog: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category_blogs::Entity",
        from = "Column::IdCategoryBlog",
        to = "super::category_blogs::Column::Id"
    )]
    CategoryBlogs,
}

impl Related<super::category_blogs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryBlogs.def()
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
