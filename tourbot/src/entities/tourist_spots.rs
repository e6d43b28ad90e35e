use sea_orm::entity::prelude::*;

/// Attractions, parking lots and information centres share this table;
/// `category_code` tells them apart.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tourist_spots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_code: String,
    pub category_code: String,
    pub name_ko: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub homepage_url: Option<String>,
    pub main_image_url: Option<String>,
    pub is_active: bool,
    pub sort_order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
