//! Dispatch tests against the real migrations and the sample data set.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::doc_markdown
)]

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use tourbot::blocks::BLOCKS;
use tourbot::db::init_database;
use tourbot::dispatch::dispatch;
use tourbot::entities::prelude::*;
use tourbot::kakao::{BasicCard, ButtonAction, Output, SkillRequest, SkillResponse};
use tourbot::responses::{
    BUS_ROUTE_NOT_FOUND_TEXT, FACILITIES_NOT_FOUND_TEXT, FAQ_CATEGORIES_EMPTY_TEXT,
    FAQ_SEARCH_PROMPT_TEXT, HOME_LABEL, ReplyContext, SPOTS_NOT_FOUND_TEXT, SYSTEM_ERROR_TEXT,
    UNKNOWN_INTENT_TEXT,
};
use tourbot::seed::seed_sample_data;

const BASE_URL: &str = "https://bot.example.com";

async fn setup_test_db() -> DatabaseConnection {
    let db = init_database("sqlite::memory:", None).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn setup_seeded_db() -> DatabaseConnection {
    let db = setup_test_db().await;
    seed_sample_data(&db).await.unwrap();
    db
}

fn ctx() -> ReplyContext {
    ReplyContext::new(BASE_URL, "gyeongsan")
}

fn request(intent: &str, utterance: &str, action: Value) -> SkillRequest {
    serde_json::from_value(json!({
        "intent": { "name": intent },
        "userRequest": { "utterance": utterance },
        "action": action,
    }))
    .unwrap()
}

async fn ask(db: &DatabaseConnection, intent: &str, utterance: &str) -> SkillResponse {
    dispatch(db, &ctx(), &request(intent, utterance, json!({}))).await
}

fn text(response: &SkillResponse) -> &str {
    match &response.template.outputs[0] {
        Output::SimpleText(simple) => &simple.text,
        other => panic!("expected simpleText, got {other:?}"),
    }
}

fn cards(response: &SkillResponse, index: usize) -> &[BasicCard] {
    match &response.template.outputs[index] {
        Output::Carousel(carousel) => &carousel.items,
        other => panic!("expected carousel, got {other:?}"),
    }
}

fn quick_reply_labels(response: &SkillResponse) -> Vec<&str> {
    response
        .template
        .quick_replies
        .iter()
        .map(|q| q.label.as_str())
        .collect()
}

fn description(card: &BasicCard) -> &str {
    card.description.as_deref().unwrap_or_default()
}

#[tokio::test]
async fn test_main_menu_cards_use_public_images() {
    let db = setup_test_db().await;
    let response = ask(&db, "main", "처음으로").await;

    let items = cards(&response, 0);
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].title.as_deref(), Some("관광지 안내"));
    assert_eq!(
        items[0].thumbnail.as_ref().unwrap().image_url,
        format!("{BASE_URL}/images/kyeongsan_m_1_info.png")
    );
    assert_eq!(
        items[3].buttons[0].action,
        ButtonAction::Message {
            message_text: "자주 묻는 질문".to_string()
        }
    );
}

#[tokio::test]
async fn test_tourist_spots_follow_sort_order() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "tourist_spots_list_culture", "문화유적/사찰").await;

    let items = cards(&response, 0);
    let titles: Vec<_> = items.iter().filter_map(|c| c.title.as_deref()).collect();
    assert_eq!(titles, vec!["팔공산 갓바위", "삼성현역사문화공원", "환성사"]);

    let labels: Vec<_> = items[1].buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["웹페이지 보기", "지도보기", "전화하기"]);
    match &items[1].buttons[1].action {
        ButtonAction::WebLink { web_link_url } => {
            assert!(web_link_url.starts_with(&format!("{BASE_URL}/map/open?query=")));
        }
        other => panic!("expected webLink, got {other:?}"),
    }

    assert!(description(&items[0]).contains("📍 경상북도 경산시 와촌면"));
    assert_eq!(quick_reply_labels(&response), vec![HOME_LABEL, "다른 유형 보기"]);
}

#[tokio::test]
async fn test_unknown_region_has_no_spots() {
    let db = setup_seeded_db().await;
    let req = request(
        "tourist_spots_list_nature",
        "산책명소",
        json!({ "params": { "region_code": "yeongju" } }),
    );
    let response = dispatch(&db, &ctx(), &req).await;

    assert_eq!(text(&response), SPOTS_NOT_FOUND_TEXT);
    assert_eq!(quick_reply_labels(&response), vec![HOME_LABEL, "다른 유형 보기"]);
}

#[tokio::test]
async fn test_facilities_only_show_own_images() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "transport_info_list_parking", "주차장").await;

    let items = cards(&response, 0);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|c| c.thumbnail.is_none()));
}

#[tokio::test]
async fn test_programs_lead_with_city_tour_card() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "tour_programs_list", "투어 프로그램").await;

    let Output::BasicCard(city_tour) = &response.template.outputs[0] else {
        panic!("expected the city tour card first");
    };
    assert_eq!(city_tour.title.as_deref(), Some("경산 시티투어 안내"));
    assert_eq!(city_tour.buttons.len(), 2);

    let courses = cards(&response, 1);
    assert_eq!(courses.len(), 2);
    assert!(description(&courses[0]).contains("성인 5,000원\n사전 예약제"));
    assert!(description(&courses[0]).contains("📍 집결 장소: 임당역 5번 출구"));
}

#[tokio::test]
async fn test_programs_fallback_names_contact() {
    let db = setup_test_db().await;
    let response = ask(&db, "tour_programs_list", "투어").await;
    assert!(text(&response).contains("경산문화관광재단"));
}

#[tokio::test]
async fn test_bus_numbers_become_quick_replies() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "transport_info_list_bus_edge", "간선버스").await;

    assert!(text(&response).contains("간선버스"));
    assert_eq!(quick_reply_labels(&response), vec![HOME_LABEL, "100", "399"]);
    assert_eq!(response.template.quick_replies[1].message_text, "100");
}

#[tokio::test]
async fn test_bus_detail_from_utterance() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "transport_info_list_bus_detail", " 100 ").await;

    let Output::BasicCard(card) = &response.template.outputs[0] else {
        panic!("expected a detail card");
    };
    assert_eq!(card.title.as_deref(), Some("100번"));
    assert!(description(card).contains("🚩출발지: 경산역"));
    assert!(description(card).contains("🕒첫차/막차: 05:30 ~ 23:00"));
    assert_eq!(card.buttons[0].label, "노선도 보기");
}

#[tokio::test]
async fn test_bus_detail_prefers_route_number_param() {
    let db = setup_seeded_db().await;
    let req = request(
        "transport_info_list_bus_detail",
        "840번 버스",
        json!({ "detailParams": { "route_number": { "origin": "840번", "value": "840" } } }),
    );
    let response = dispatch(&db, &ctx(), &req).await;

    let Output::BasicCard(card) = &response.template.outputs[0] else {
        panic!("expected a detail card");
    };
    assert_eq!(card.title.as_deref(), Some("840번"));
    assert_eq!(card.buttons[0].label, "다른 노선 보기");
}

#[tokio::test]
async fn test_bus_detail_not_found() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "transport_info_list_bus_detail", "9999").await;
    assert_eq!(text(&response), BUS_ROUTE_NOT_FOUND_TEXT);
}

#[tokio::test]
async fn test_travel_route_lists_waypoints() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "transport_info_list_route_theme", "테마형").await;

    let items = cards(&response, 0);
    assert_eq!(items.len(), 1);
    assert!(description(&items[0]).contains("🗺 경로: 반곡지 → 삼성현역사문화공원 → 남매지"));
    assert!(items[0].buttons.is_empty());
}

#[tokio::test]
async fn test_faq_categories_link_to_blocks() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "qna_list", "자주 묻는 질문").await;

    let items = cards(&response, 0);
    assert_eq!(items.len(), 4);
    assert_eq!(items[1].title.as_deref(), Some("교통 및 주차 안내"));
    assert_eq!(
        items[1].buttons[0].action,
        ButtonAction::Message {
            message_text: "교통편의 질문".to_string()
        }
    );
}

#[tokio::test]
async fn test_faq_list_marks_missing_answers() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "qna_list_festival", "축제행사 질문").await;

    assert_eq!(
        text(&response),
        "Q.경산자인단오제는 언제 열리나요?\nA.답변 준비 중입니다. 조금만 기다려 주세요."
    );
    assert_eq!(quick_reply_labels(&response), vec![HOME_LABEL, "다른 유형의 질문"]);
}

#[tokio::test]
async fn test_faq_search_matches_questions_and_answers() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "qna_list_search", "주차장").await;

    let items = cards(&response, 0);
    let titles: Vec<_> = items.iter().filter_map(|c| c.title.as_deref()).collect();
    assert_eq!(
        titles,
        vec!["갓바위까지 얼마나 걸리나요?", "갓바위 주차장은 유료인가요?"]
    );
    assert!(description(&items[1]).starts_with("📂 카테고리: 교통 및 주차 안내"));
    assert_eq!(
        items[0].thumbnail.as_ref().unwrap().image_url,
        format!("{BASE_URL}/images/kyeongsan_m_4_faq.png")
    );
}

#[tokio::test]
async fn test_faq_search_treats_wildcards_literally() {
    let db = setup_seeded_db().await;
    let response = ask(&db, "qna_list_search", "%").await;
    assert!(text(&response).contains("검색어 \"%\""));
}

#[tokio::test]
async fn test_faq_search_prompts_on_trigger_phrase() {
    let db = setup_seeded_db().await;
    assert_eq!(
        text(&ask(&db, "qna_list_search", "질문할게 있어").await),
        FAQ_SEARCH_PROMPT_TEXT
    );
    assert_eq!(
        text(&ask(&db, "qna_list_search", "   ").await),
        FAQ_SEARCH_PROMPT_TEXT
    );
}

#[tokio::test]
async fn test_empty_results_yield_fallback_text() {
    let db = setup_test_db().await;

    let cases: [(&str, &str, String, Vec<&str>); 7] = [
        (
            "transport_info_list_parking",
            "주차장",
            FACILITIES_NOT_FOUND_TEXT.to_string(),
            vec![HOME_LABEL, "다른 유형 보기"],
        ),
        (
            "transport_info_list_center",
            "관광안내소",
            FACILITIES_NOT_FOUND_TEXT.to_string(),
            vec![HOME_LABEL, "다른 유형 보기"],
        ),
        (
            "transport_info_list_bus_loop",
            "순환버스",
            "순환버스 정보를 찾지 못했어요 😢\n다른 노선을 선택해 주세요.".to_string(),
            vec![HOME_LABEL, "간선버스", "순환버스", "지선버스"],
        ),
        (
            "transport_info_list_route_hub",
            "출발지기준",
            "출발지(허브) 기준 동선 정보를 찾지 못했어요 😢\n다른 유형을 선택해 주세요."
                .to_string(),
            vec![HOME_LABEL, "테마형", "출발지기준", "코스형"],
        ),
        (
            "qna_list",
            "자주 묻는 질문",
            FAQ_CATEGORIES_EMPTY_TEXT.to_string(),
            vec![HOME_LABEL],
        ),
        (
            "qna_list_tour",
            "관광지 질문",
            "관광 정보 안내에 대한 자주 묻는 질문이 아직 준비되지 않았어요 😢".to_string(),
            vec![HOME_LABEL, "다른 유형의 질문"],
        ),
        (
            "tourist_spots_list_festival",
            "축제",
            SPOTS_NOT_FOUND_TEXT.to_string(),
            vec![HOME_LABEL, "다른 유형 보기"],
        ),
    ];

    for (intent, utterance, expected_text, expected_quick_replies) in cases {
        let response = ask(&db, intent, utterance).await;
        assert_eq!(text(&response), expected_text, "{intent}");
        assert_eq!(
            quick_reply_labels(&response),
            expected_quick_replies,
            "{intent}"
        );
    }
}

#[tokio::test]
async fn test_unknown_intent_gets_fallback() {
    let db = setup_test_db().await;
    let response = ask(&db, "no_such_block", "안녕").await;

    assert_eq!(text(&response), UNKNOWN_INTENT_TEXT);
    assert_eq!(quick_reply_labels(&response), vec![HOME_LABEL]);
}

#[tokio::test]
async fn test_database_failure_yields_apology() {
    let db = setup_seeded_db().await;
    db.execute_unprepared("DROP TABLE tourist_spots")
        .await
        .unwrap();

    let response = ask(&db, "tourist_spots_list_culture", "문화유적").await;
    assert_eq!(text(&response), SYSTEM_ERROR_TEXT);
    assert!(response.has_quick_reply(HOME_LABEL));
}

#[tokio::test]
async fn test_every_block_replies_with_home_first() {
    for data in [false, true] {
        let db = if data {
            setup_seeded_db().await
        } else {
            setup_test_db().await
        };

        for block in BLOCKS {
            let utterance = block.utterances.first().copied().unwrap_or("100");
            let response = ask(&db, block.block_name, utterance).await;

            assert!(!response.template.outputs.is_empty(), "{}", block.block_name);
            assert_eq!(
                response.template.quick_replies[0].label, HOME_LABEL,
                "{}",
                block.block_name
            );
            assert!(response.template.quick_replies.len() <= 10);
        }
    }
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = setup_seeded_db().await;
    seed_sample_data(&db).await.unwrap();

    assert_eq!(TouristSpots::find().count(&db).await.unwrap(), 9);
    assert_eq!(BusRoutes::find().count(&db).await.unwrap(), 5);
    assert_eq!(FaqCategories::find().count(&db).await.unwrap(), 4);
    assert_eq!(Faqs::find().count(&db).await.unwrap(), 6);
}
