//! Sample Gyeongsan data set for local runs and demos.
//!
//! Each table is seeded only when it has no rows for the region yet, so
//! running the seed again (or over curated data) changes nothing.

use crate::config::DEFAULT_REGION_CODE;
use crate::entities::{
    bus_routes, faq_categories, faqs, prelude::*, tour_courses, tourist_spots, travel_routes,
};
use crate::error::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde_json::json;
use tracing::info;

const REGION: &str = DEFAULT_REGION_CODE;

pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<()> {
    info!("Seeding sample data for region {}", REGION);

    seed_tourist_spots(db).await?;
    seed_tour_courses(db).await?;
    seed_bus_routes(db).await?;
    seed_travel_routes(db).await?;
    seed_faqs(db).await?;

    info!("Sample data seeding completed");
    Ok(())
}

async fn seed_tourist_spots(db: &DatabaseConnection) -> Result<()> {
    let existing = TouristSpots::find()
        .filter(tourist_spots::Column::RegionCode.eq(REGION))
        .count(db)
        .await?;
    if existing > 0 {
        info!("tourist_spots already has {} rows, skipping", existing);
        return Ok(());
    }

    #[rustfmt::skip]
    let spots = [
        ("CULTURAL_TEMPLE", "팔공산 갓바위", "한 가지 소원은 꼭 들어준다는 관봉 석조여래좌상이 있는 기도처입니다.", "경상북도 경산시 와촌면 갓바위로 699", Some("053-851-1868"), None, Some(1)),
        ("CULTURAL_TEMPLE", "삼성현역사문화공원", "원효, 설총, 일연 세 성현의 이야기를 만날 수 있는 역사문화공원입니다.", "경상북도 경산시 남산면 삼성현공원로 88", Some("053-804-7321"), Some("https://www.gbgs.go.kr/"), Some(2)),
        ("CULTURAL_TEMPLE", "환성사", "신라 흥덕왕 때 창건된 고찰로, 수월관 누각이 아름답습니다.", "경상북도 경산시 하양읍 환성로 392-1", None, None, None),
        ("NATURE_WALK", "반곡지", "왕버들이 물가에 늘어선 사진 명소로, 봄 복사꽃 풍경이 유명합니다.", "경상북도 경산시 남산면 반곡리 207", None, None, Some(1)),
        ("NATURE_WALK", "남매지", "도심 속 저수지를 따라 걷는 산책로와 야경이 좋은 곳입니다.", "경상북도 경산시 계양동 656", None, None, Some(2)),
        ("FESTIVAL_ACTIVITY", "경산자인단오제", "국가무형문화재 한장군놀이를 중심으로 열리는 전통 단오 축제입니다.", "경상북도 경산시 자인면 계정길 67", Some("053-810-6331"), None, Some(1)),
        ("PARKING", "갓바위 공영주차장", "갓바위 등산로 입구 공영주차장입니다.", "경상북도 경산시 와촌면 대한리 산 45", None, None, Some(1)),
        ("PARKING", "반곡지 주차장", "반곡지 방문객을 위한 무료 주차장입니다.", "경상북도 경산시 남산면 반곡리 197", None, None, Some(2)),
        ("INFORMATION", "경산역 관광안내소", "관광 지도와 시티투어 안내를 받을 수 있습니다.", "경상북도 경산시 중앙로 1", Some("053-810-5371"), None, Some(1)),
    ];

    let models = spots.into_iter().map(
        |(category, name, summary, address, phone, homepage, sort_order)| {
            tourist_spots::ActiveModel {
                region_code: Set(REGION.to_string()),
                category_code: Set(category.to_string()),
                name_ko: Set(name.to_string()),
                summary: Set(Some(summary.to_string())),
                address: Set(Some(address.to_string())),
                phone: Set(phone.map(str::to_string)),
                homepage_url: Set(homepage.map(str::to_string)),
                main_image_url: Set(None),
                is_active: Set(true),
                sort_order: Set(sort_order),
                ..Default::default()
            }
        },
    );

    TouristSpots::insert_many(models).exec(db).await?;
    info!("Inserted sample tourist spots");
    Ok(())
}

async fn seed_tour_courses(db: &DatabaseConnection) -> Result<()> {
    let existing = TourCourses::find()
        .filter(tour_courses::Column::RegionCode.eq(REGION))
        .count(db)
        .await?;
    if existing > 0 {
        info!("tour_courses already has {} rows, skipping", existing);
        return Ok(());
    }

    let courses = [
        tour_courses::ActiveModel {
            region_code: Set(REGION.to_string()),
            course_name: Set("역사문화 코스".to_string()),
            course_type: Set(Some("정기".to_string())),
            course_detail: Set(Some(
                "임당역 출발 → 삼성현역사문화공원 → 반곡지 → 임당역 도착".to_string(),
            )),
            schedule_info: Set(Some("매주 토요일 10:00".to_string())),
            meeting_point: Set(Some("임당역 5번 출구".to_string())),
            reservation_info: Set(Some("성인 5,000원\\n사전 예약제".to_string())),
            course_image_url: Set(None),
            is_active: Set(true),
            sort_order: Set(Some(1)),
            ..Default::default()
        },
        tour_courses::ActiveModel {
            region_code: Set(REGION.to_string()),
            course_name: Set("갓바위 기도 코스".to_string()),
            course_type: Set(Some("정기".to_string())),
            course_detail: Set(Some("임당역 출발 → 갓바위 → 환성사 → 임당역 도착".to_string())),
            schedule_info: Set(Some("매주 일요일 09:30".to_string())),
            meeting_point: Set(Some("임당역 5번 출구".to_string())),
            reservation_info: Set(None),
            course_image_url: Set(None),
            is_active: Set(true),
            sort_order: Set(Some(2)),
            ..Default::default()
        },
    ];

    TourCourses::insert_many(courses).exec(db).await?;
    info!("Inserted sample tour courses");
    Ok(())
}

async fn seed_bus_routes(db: &DatabaseConnection) -> Result<()> {
    let existing = BusRoutes::find()
        .filter(bus_routes::Column::RegionCode.eq(REGION))
        .count(db)
        .await?;
    if existing > 0 {
        info!("bus_routes already has {} rows, skipping", existing);
        return Ok(());
    }

    let routes = [
        ("100", "EDGE", "경산역", "영남대", Some("10~15분"), Some("05:30"), Some("23:00")),
        ("399", "EDGE", "하양", "반월당", Some("12분"), Some("05:40"), Some("22:40")),
        ("순환1", "LOOP", "경산시청", "경산시청", Some("30분"), Some("06:00"), Some("21:30")),
        ("803", "BRANCH", "경산시장", "갓바위", Some("40분"), Some("06:10"), Some("20:50")),
        ("840", "BRANCH", "경산역", "자인", None, None, None),
    ];

    let models = routes.into_iter().enumerate().map(
        |(i, (number, route_type, origin, destination, interval, first, last))| {
            bus_routes::ActiveModel {
                region_code: Set(REGION.to_string()),
                route_number: Set(number.to_string()),
                route_type: Set(route_type.to_string()),
                origin_name: Set(origin.to_string()),
                destination_name: Set(destination.to_string()),
                interval_info: Set(interval.map(str::to_string)),
                first_bus_time: Set(first.map(str::to_string)),
                last_bus_time: Set(last.map(str::to_string)),
                weekday_timetable_url: Set(None),
                holiday_timetable_url: Set(None),
                route_map_url: Set(first.map(|_| "https://businfo.daegu.go.kr/".to_string())),
                is_active: Set(true),
                sort_order: Set(i32::try_from(i).ok()),
                ..Default::default()
            }
        },
    );

    BusRoutes::insert_many(models).exec(db).await?;
    info!("Inserted sample bus routes");
    Ok(())
}

async fn seed_travel_routes(db: &DatabaseConnection) -> Result<()> {
    let existing = TravelRoutes::find()
        .filter(travel_routes::Column::RegionCode.eq(REGION))
        .count(db)
        .await?;
    if existing > 0 {
        info!("travel_routes already has {} rows, skipping", existing);
        return Ok(());
    }

    #[rustfmt::skip]
    let routes = [
        ("THEME", "사진 명소 동선", "봄 꽃과 저수지 풍경을 따라가는 동선입니다.", json!(["반곡지", "삼성현역사문화공원", "남매지"]), "약 4시간", "자가용"),
        ("HUB", "경산역 출발 동선", "경산역에서 대중교통으로 이어지는 동선입니다.", json!(["경산역", "경산시장", "남매지"]), "약 3시간", "버스·도보"),
        ("COURSE", "반나절 기도 코스", "오전에 다녀오기 좋은 갓바위 중심 코스입니다.", json!(["갓바위", "환성사"]), "약 5시간", "버스"),
    ];

    let models = routes.into_iter().enumerate().map(
        |(i, (route_type, title, description, items, total_time, transport))| {
            travel_routes::ActiveModel {
                region_code: Set(REGION.to_string()),
                route_type: Set(route_type.to_string()),
                title: Set(title.to_string()),
                description: Set(Some(description.to_string())),
                items: Set(Some(items)),
                total_time: Set(Some(total_time.to_string())),
                transport_type: Set(Some(transport.to_string())),
                map_url: Set(None),
                is_active: Set(true),
                sort_order: Set(i32::try_from(i).ok()),
                ..Default::default()
            }
        },
    );

    TravelRoutes::insert_many(models).exec(db).await?;
    info!("Inserted sample travel routes");
    Ok(())
}

async fn seed_faqs(db: &DatabaseConnection) -> Result<()> {
    let existing = FaqCategories::find()
        .filter(faq_categories::Column::RegionCode.eq(REGION))
        .count(db)
        .await?;
    if existing > 0 {
        info!("faq_categories already has {} rows, skipping FAQs", existing);
        return Ok(());
    }

    let categories = [
        ("QNA_TOUR", "관광 정보 안내"),
        ("QNA_TRANSPORT", "교통 및 주차 안내"),
        ("QNA_PROGRAM", "시티투어 · 투어 프로그램 안내"),
        ("QNA_FESTIVAL", "축제 · 행사 안내"),
    ];

    let category_models = categories.iter().enumerate().map(|(i, (code, title))| {
        faq_categories::ActiveModel {
            region_code: Set(REGION.to_string()),
            category_code: Set((*code).to_string()),
            title: Set((*title).to_string()),
            is_active: Set(true),
            sort_order: Set(i32::try_from(i).ok()),
            ..Default::default()
        }
    });
    FaqCategories::insert_many(category_models).exec(db).await?;

    #[rustfmt::skip]
    let entries = [
        ("QNA_TOUR", "갓바위까지 얼마나 걸리나요?", Some("주차장에서 도보로 약 1시간 정도 걸립니다.")),
        ("QNA_TOUR", "반곡지는 언제 가면 좋나요?", Some("복사꽃이 피는 4월 초순이 가장 아름답습니다.")),
        ("QNA_TRANSPORT", "갓바위 주차장은 유료인가요?", Some("공영주차장은 소형차 기준 1일 2,000원입니다.")),
        ("QNA_TRANSPORT", "경산역에서 영남대까지 가는 버스가 있나요?", Some("간선 100번 버스를 이용하시면 됩니다.")),
        ("QNA_PROGRAM", "시티투어는 어떻게 예약하나요?", Some("전화 또는 경산문화관광재단 홈페이지에서 예약할 수 있습니다.")),
        ("QNA_FESTIVAL", "경산자인단오제는 언제 열리나요?", None),
    ];

    let faq_models = entries.into_iter().enumerate().map(|(i, (code, question, answer))| {
        faqs::ActiveModel {
            region_code: Set(REGION.to_string()),
            category_code: Set(code.to_string()),
            question: Set(question.to_string()),
            answer: Set(answer.map(str::to_string)),
            is_active: Set(true),
            sort_order: Set(i32::try_from(i).ok()),
            ..Default::default()
        }
    });
    Faqs::insert_many(faq_models).exec(db).await?;

    info!("Inserted sample FAQ categories and FAQs");
    Ok(())
}
