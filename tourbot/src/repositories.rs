//! Read-only queries behind the chatbot menus.
//!
//! Every query is scoped to a region and to active rows, sorts by
//! `sort_order` with nulls last and a stable tie-break, and is capped so a
//! reply never has to page.

use crate::entities::{
    bus_routes, faq_categories, faqs, prelude::*, tour_courses, tourist_spots, travel_routes,
};
use crate::error::Result;
use sea_orm::sea_query::{Expr, Func, LikeExpr, NullOrdering};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, Order,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait,
};

pub const TOURIST_SPOT_LIMIT: u64 = 20;
pub const TOUR_COURSE_LIMIT: u64 = 20;
pub const BUS_ROUTE_NUMBER_LIMIT: u64 = 20;
pub const TRAVEL_ROUTE_LIMIT: u64 = 20;
pub const FAQ_CATEGORY_LIMIT: u64 = 20;
pub const FAQ_LIMIT: u64 = 20;
pub const FAQ_SEARCH_LIMIT: u64 = 5;

/// A FAQ matched by keyword, with its category title.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct FaqSearchHit {
    pub id: i32,
    pub category_code: String,
    pub question: String,
    pub answer: Option<String>,
    pub category_title: String,
}

pub async fn get_tourist_spots(
    db: &DatabaseConnection,
    region_code: &str,
    category_code: &str,
) -> Result<Vec<tourist_spots::Model>> {
    let spots = TouristSpots::find()
        .filter(tourist_spots::Column::RegionCode.eq(region_code))
        .filter(tourist_spots::Column::CategoryCode.eq(category_code))
        .filter(tourist_spots::Column::IsActive.eq(true))
        .order_by_with_nulls(
            tourist_spots::Column::SortOrder,
            Order::Asc,
            NullOrdering::Last,
        )
        .order_by_asc(tourist_spots::Column::NameKo)
        .limit(TOURIST_SPOT_LIMIT)
        .all(db)
        .await?;

    Ok(spots)
}

pub async fn get_tour_courses(
    db: &DatabaseConnection,
    region_code: &str,
) -> Result<Vec<tour_courses::Model>> {
    let courses = TourCourses::find()
        .filter(tour_courses::Column::RegionCode.eq(region_code))
        .filter(tour_courses::Column::IsActive.eq(true))
        .order_by_with_nulls(
            tour_courses::Column::SortOrder,
            Order::Asc,
            NullOrdering::Last,
        )
        .order_by_asc(tour_courses::Column::CourseName)
        .limit(TOUR_COURSE_LIMIT)
        .all(db)
        .await?;

    Ok(courses)
}

/// Distinct route numbers of one type (`EDGE`, `LOOP`, `BRANCH`).
pub async fn get_bus_route_numbers_by_type(
    db: &DatabaseConnection,
    region_code: &str,
    route_type: &str,
) -> Result<Vec<String>> {
    let numbers = BusRoutes::find()
        .select_only()
        .column(bus_routes::Column::RouteNumber)
        .distinct()
        .filter(bus_routes::Column::RegionCode.eq(region_code))
        .filter(bus_routes::Column::RouteType.eq(route_type))
        .filter(bus_routes::Column::IsActive.eq(true))
        .order_by_asc(bus_routes::Column::RouteNumber)
        .limit(BUS_ROUTE_NUMBER_LIMIT)
        .into_tuple::<String>()
        .all(db)
        .await?;

    Ok(numbers)
}

pub async fn get_bus_route_detail(
    db: &DatabaseConnection,
    region_code: &str,
    route_number: &str,
) -> Result<Option<bus_routes::Model>> {
    let route = BusRoutes::find()
        .filter(bus_routes::Column::RegionCode.eq(region_code))
        .filter(bus_routes::Column::RouteNumber.eq(route_number))
        .filter(bus_routes::Column::IsActive.eq(true))
        .order_by_with_nulls(
            bus_routes::Column::SortOrder,
            Order::Asc,
            NullOrdering::Last,
        )
        .order_by_asc(bus_routes::Column::Id)
        .one(db)
        .await?;

    Ok(route)
}

/// Travel routes of a region, optionally narrowed to one route type.
pub async fn get_travel_routes(
    db: &DatabaseConnection,
    region_code: &str,
    route_type: Option<&str>,
) -> Result<Vec<travel_routes::Model>> {
    let routes = TravelRoutes::find()
        .filter(travel_routes::Column::RegionCode.eq(region_code))
        .filter(travel_routes::Column::IsActive.eq(true))
        .apply_if(route_type, |query, route_type| {
            query.filter(travel_routes::Column::RouteType.eq(route_type))
        })
        .order_by_with_nulls(
            travel_routes::Column::SortOrder,
            Order::Asc,
            NullOrdering::Last,
        )
        .order_by_asc(travel_routes::Column::Id)
        .limit(TRAVEL_ROUTE_LIMIT)
        .all(db)
        .await?;

    Ok(routes)
}

pub async fn get_faq_categories(
    db: &DatabaseConnection,
    region_code: &str,
) -> Result<Vec<faq_categories::Model>> {
    let categories = FaqCategories::find()
        .filter(faq_categories::Column::RegionCode.eq(region_code))
        .filter(faq_categories::Column::IsActive.eq(true))
        .order_by_with_nulls(
            faq_categories::Column::SortOrder,
            Order::Asc,
            NullOrdering::Last,
        )
        .order_by_asc(faq_categories::Column::Id)
        .limit(FAQ_CATEGORY_LIMIT)
        .all(db)
        .await?;

    Ok(categories)
}

pub async fn get_faqs_by_category(
    db: &DatabaseConnection,
    region_code: &str,
    category_code: &str,
) -> Result<Vec<faqs::Model>> {
    let faqs = Faqs::find()
        .filter(faqs::Column::RegionCode.eq(region_code))
        .filter(faqs::Column::CategoryCode.eq(category_code))
        .filter(faqs::Column::IsActive.eq(true))
        .order_by_with_nulls(faqs::Column::SortOrder, Order::Asc, NullOrdering::Last)
        .order_by_asc(faqs::Column::Id)
        .limit(FAQ_LIMIT)
        .all(db)
        .await?;

    Ok(faqs)
}

/// Case-insensitive substring search over questions and answers. LIKE
/// wildcards typed by the user match literally.
pub async fn search_faqs(
    db: &DatabaseConnection,
    region_code: &str,
    keyword: &str,
    limit: u64,
) -> Result<Vec<FaqSearchHit>> {
    let pattern = format!("%{}%", escape_like(&keyword.to_lowercase()));
    let like_keyword = |column: faqs::Column| {
        Expr::expr(Func::lower(Expr::col((faqs::Entity, column))))
            .like(LikeExpr::new(pattern.clone()).escape('\\'))
    };

    let hits = Faqs::find()
        .select_only()
        .column(faqs::Column::Id)
        .column(faqs::Column::CategoryCode)
        .column(faqs::Column::Question)
        .column(faqs::Column::Answer)
        .column_as(faq_categories::Column::Title, "category_title")
        .join(JoinType::InnerJoin, faqs::Relation::FaqCategories.def())
        .filter(faqs::Column::RegionCode.eq(region_code))
        .filter(faq_categories::Column::RegionCode.eq(region_code))
        .filter(faqs::Column::IsActive.eq(true))
        .filter(faq_categories::Column::IsActive.eq(true))
        .filter(
            Condition::any()
                .add(like_keyword(faqs::Column::Question))
                .add(like_keyword(faqs::Column::Answer)),
        )
        .order_by_with_nulls(faqs::Column::SortOrder, Order::Asc, NullOrdering::Last)
        .order_by_asc(faqs::Column::Id)
        .limit(limit)
        .into_model::<FaqSearchHit>()
        .all(db)
        .await?;

    Ok(hits)
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Set};

    async fn setup_test_db() -> DatabaseConnection {
        let db = init_database("sqlite::memory:", None).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn insert_spot(
        db: &DatabaseConnection,
        name: &str,
        sort_order: Option<i32>,
        is_active: bool,
    ) {
        tourist_spots::ActiveModel {
            region_code: Set("gyeongsan".to_string()),
            category_code: Set("NATURE_WALK".to_string()),
            name_ko: Set(name.to_string()),
            summary: Set(None),
            address: Set(None),
            phone: Set(None),
            homepage_url: Set(None),
            main_image_url: Set(None),
            is_active: Set(is_active),
            sort_order: Set(sort_order),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
        assert_eq!(escape_like("주차장"), "주차장");
    }

    #[tokio::test]
    async fn test_empty_tables_return_nothing() {
        let db = setup_test_db().await;
        assert!(get_tourist_spots(&db, "gyeongsan", "NATURE_WALK")
            .await
            .unwrap()
            .is_empty());
        assert!(get_bus_route_detail(&db, "gyeongsan", "100")
            .await
            .unwrap()
            .is_none());
        assert!(search_faqs(&db, "gyeongsan", "주차", FAQ_SEARCH_LIMIT)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_spots_sort_nulls_last_then_by_name() {
        let db = setup_test_db().await;
        insert_spot(&db, "다", None, true).await;
        insert_spot(&db, "나", Some(2), true).await;
        insert_spot(&db, "가", None, true).await;
        insert_spot(&db, "라", Some(1), true).await;
        insert_spot(&db, "숨김", Some(0), false).await;

        let names: Vec<String> = get_tourist_spots(&db, "gyeongsan", "NATURE_WALK")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name_ko)
            .collect();

        assert_eq!(names, vec!["라", "나", "가", "다"]);
    }

    #[tokio::test]
    async fn test_spots_are_capped() {
        let db = setup_test_db().await;
        for i in 0..25 {
            insert_spot(&db, &format!("spot {i:02}"), Some(i), true).await;
        }

        let spots = get_tourist_spots(&db, "gyeongsan", "NATURE_WALK")
            .await
            .unwrap();
        assert_eq!(spots.len() as u64, TOURIST_SPOT_LIMIT);
    }
}
