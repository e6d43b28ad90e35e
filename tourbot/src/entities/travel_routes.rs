use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "travel_routes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_code: String,
    /// `THEME`, `HUB` or `COURSE`
    pub route_type: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub items: Option<Json>,
    pub total_time: Option<String>,
    pub transport_type: Option<String>,
    pub map_url: Option<String>,
    pub is_active: bool,
    pub sort_order: Option<i32>,
}

impl Model {
    /// Waypoint names in visiting order. Non-string entries are skipped.
    pub fn waypoints(&self) -> Vec<&str> {
        self.items
            .as_ref()
            .and_then(Json::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Json::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
