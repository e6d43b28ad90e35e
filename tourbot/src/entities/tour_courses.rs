use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tour_courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_code: String,
    pub course_name: String,
    pub course_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub course_detail: Option<String>,
    pub schedule_info: Option<String>,
    pub meeting_point: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub reservation_info: Option<String>,
    pub course_image_url: Option<String>,
    pub is_active: bool,
    pub sort_order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
