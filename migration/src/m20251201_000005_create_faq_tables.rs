use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FaqCategories::Table)
                    .if_not_exists()
                    .col(pk_auto(FaqCategories::Id))
                    .col(string(FaqCategories::RegionCode))
                    .col(string(FaqCategories::CategoryCode))
                    .col(string(FaqCategories::Title))
                    .col(boolean(FaqCategories::IsActive).default(true))
                    .col(integer_null(FaqCategories::SortOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_faq_categories_region_code")
                    .table(FaqCategories::Table)
                    .col(FaqCategories::RegionCode)
                    .col(FaqCategories::CategoryCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(pk_auto(Faqs::Id))
                    .col(string(Faqs::RegionCode))
                    .col(string(Faqs::CategoryCode))
                    .col(text(Faqs::Question))
                    .col(text_null(Faqs::Answer))
                    .col(boolean(Faqs::IsActive).default(true))
                    .col(integer_null(Faqs::SortOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_faqs_region_category")
                    .table(Faqs::Table)
                    .col(Faqs::RegionCode)
                    .col(Faqs::CategoryCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FaqCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FaqCategories {
    Table,
    Id,
    RegionCode,
    CategoryCode,
    Title,
    IsActive,
    SortOrder,
}

#[derive(DeriveIden)]
enum Faqs {
    Table,
    Id,
    RegionCode,
    CategoryCode,
    Question,
    Answer,
    IsActive,
    SortOrder,
}
