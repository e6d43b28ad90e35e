use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TravelRoutes::Table)
                    .if_not_exists()
                    .col(pk_auto(TravelRoutes::Id))
                    .col(string(TravelRoutes::RegionCode))
                    .col(string(TravelRoutes::RouteType))
                    .col(string(TravelRoutes::Title))
                    .col(text_null(TravelRoutes::Description))
                    // Ordered waypoint names, stored as a JSON array of strings
                    .col(json_null(TravelRoutes::Items))
                    .col(string_null(TravelRoutes::TotalTime))
                    .col(string_null(TravelRoutes::TransportType))
                    .col(string_null(TravelRoutes::MapUrl))
                    .col(boolean(TravelRoutes::IsActive).default(true))
                    .col(integer_null(TravelRoutes::SortOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_travel_routes_region_type")
                    .table(TravelRoutes::Table)
                    .col(TravelRoutes::RegionCode)
                    .col(TravelRoutes::RouteType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TravelRoutes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TravelRoutes {
    Table,
    Id,
    RegionCode,
    RouteType,
    Title,
    Description,
    Items,
    TotalTime,
    TransportType,
    MapUrl,
    IsActive,
    SortOrder,
}
