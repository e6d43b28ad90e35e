pub use sea_orm_migration::prelude::*;

mod m20251201_000001_create_tourist_spots;
mod m20251201_000002_create_tour_courses;
mod m20251201_000003_create_bus_routes;
mod m20251201_000004_create_travel_routes;
mod m20251201_000005_create_faq_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_create_tourist_spots::Migration),
            Box::new(m20251201_000002_create_tour_courses::Migration),
            Box::new(m20251201_000003_create_bus_routes::Migration),
            Box::new(m20251201_000004_create_travel_routes::Migration),
            Box::new(m20251201_000005_create_faq_tables::Migration),
        ]
    }
}
