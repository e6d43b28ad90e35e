use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bus_routes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_code: String,
    pub route_number: String,
    /// `EDGE`, `LOOP` or `BRANCH`
    pub route_type: String,
    pub origin_name: String,
    pub destination_name: String,
    pub interval_info: Option<String>,
    pub first_bus_time: Option<String>,
    pub last_bus_time: Option<String>,
    pub weekday_timetable_url: Option<String>,
    pub holiday_timetable_url: Option<String>,
    pub route_map_url: Option<String>,
    pub is_active: bool,
    pub sort_order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
