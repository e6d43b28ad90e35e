use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TouristSpots::Table)
                    .if_not_exists()
                    .col(pk_auto(TouristSpots::Id))
                    .col(string(TouristSpots::RegionCode))
                    .col(string(TouristSpots::CategoryCode))
                    .col(string(TouristSpots::NameKo))
                    .col(text_null(TouristSpots::Summary))
                    .col(string_null(TouristSpots::Address))
                    .col(string_null(TouristSpots::Phone))
                    .col(string_null(TouristSpots::HomepageUrl))
                    .col(string_null(TouristSpots::MainImageUrl))
                    .col(boolean(TouristSpots::IsActive).default(true))
                    .col(integer_null(TouristSpots::SortOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tourist_spots_region_category")
                    .table(TouristSpots::Table)
                    .col(TouristSpots::RegionCode)
                    .col(TouristSpots::CategoryCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TouristSpots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TouristSpots {
    Table,
    Id,
    RegionCode,
    CategoryCode,
    NameKo,
    Summary,
    Address,
    Phone,
    HomepageUrl,
    MainImageUrl,
    IsActive,
    SortOrder,
}
