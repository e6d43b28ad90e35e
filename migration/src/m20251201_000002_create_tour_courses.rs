use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourCourses::Table)
                    .if_not_exists()
                    .col(pk_auto(TourCourses::Id))
                    .col(string(TourCourses::RegionCode))
                    .col(string(TourCourses::CourseName))
                    .col(string_null(TourCourses::CourseType))
                    .col(text_null(TourCourses::CourseDetail))
                    .col(string_null(TourCourses::ScheduleInfo))
                    .col(string_null(TourCourses::MeetingPoint))
                    .col(text_null(TourCourses::ReservationInfo))
                    .col(string_null(TourCourses::CourseImageUrl))
                    .col(boolean(TourCourses::IsActive).default(true))
                    .col(integer_null(TourCourses::SortOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tour_courses_region_code")
                    .table(TourCourses::Table)
                    .col(TourCourses::RegionCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourCourses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TourCourses {
    Table,
    Id,
    RegionCode,
    CourseName,
    CourseType,
    CourseDetail,
    ScheduleInfo,
    MeetingPoint,
    ReservationInfo,
    CourseImageUrl,
    IsActive,
    SortOrder,
}
