use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusRoutes::Table)
                    .if_not_exists()
                    .col(pk_auto(BusRoutes::Id))
                    .col(string(BusRoutes::RegionCode))
                    .col(string(BusRoutes::RouteNumber))
                    .col(string(BusRoutes::RouteType))
                    .col(string(BusRoutes::OriginName))
                    .col(string(BusRoutes::DestinationName))
                    .col(string_null(BusRoutes::IntervalInfo))
                    .col(string_null(BusRoutes::FirstBusTime))
                    .col(string_null(BusRoutes::LastBusTime))
                    .col(string_null(BusRoutes::WeekdayTimetableUrl))
                    .col(string_null(BusRoutes::HolidayTimetableUrl))
                    .col(string_null(BusRoutes::RouteMapUrl))
                    .col(boolean(BusRoutes::IsActive).default(true))
                    .col(integer_null(BusRoutes::SortOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bus_routes_region_number")
                    .table(BusRoutes::Table)
                    .col(BusRoutes::RegionCode)
                    .col(BusRoutes::RouteNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bus_routes_region_type")
                    .table(BusRoutes::Table)
                    .col(BusRoutes::RegionCode)
                    .col(BusRoutes::RouteType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusRoutes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BusRoutes {
    Table,
    Id,
    RegionCode,
    RouteNumber,
    RouteType,
    OriginName,
    DestinationName,
    IntervalInfo,
    FirstBusTime,
    LastBusTime,
    WeekdayTimetableUrl,
    HolidayTimetableUrl,
    RouteMapUrl,
    IsActive,
    SortOrder,
}
