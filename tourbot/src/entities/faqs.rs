use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "faqs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_code: String,
    pub category_code: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub answer: Option<String>,
    pub is_active: bool,
    pub sort_order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faq_categories::Entity",
        from = "Column::CategoryCode",
        to = "super::faq_categories::Column::CategoryCode"
    )]
    FaqCategories,
}

impl Related<super::faq_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FaqCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
