//! Rows to skill responses.
//!
//! Builders here are pure: they take query results and the reply context
//! and never fail. Every reply starts its quick replies with the
//! back-to-main shortcut, and every empty result set gets a fixed fallback
//! text plus shortcuts to the neighbouring menus.

use crate::blocks::{
    Menu, bus_route_type_label, faq_category_label, faq_category_utterance, first_utterance,
    travel_route_type_label,
};
use crate::entities::{bus_routes, faq_categories, faqs, tour_courses, tourist_spots, travel_routes};
use crate::kakao::{
    BasicCard, Button, MAX_CAROUSEL_ITEMS, MAX_QUICK_REPLIES, Output, QuickReply, SkillResponse,
};
use crate::regions::RegionProfile;
use crate::repositories::FaqSearchHit;
use tracing::warn;

pub const HOME_LABEL: &str = "처음으로";

pub const UNKNOWN_INTENT_TEXT: &str = "요청하신 내용을 이해하기가 조금 어려워요 😅\n메뉴를 다시 선택해 주세요.";
pub const SYSTEM_ERROR_TEXT: &str = "잠시 시스템 오류가 발생했어요 😥\n잠시 후 다시 시도해 주세요.";
pub const SPOTS_NOT_FOUND_TEXT: &str = "해당 카테고리의 관광지 정보를 찾지 못했어요 😢\n다른 유형을 선택해 주세요.";
pub const FACILITIES_NOT_FOUND_TEXT: &str = "해당 카테고리의 정보를 찾지 못했어요 😢\n다른 유형을 선택해 주세요.";
pub const BUS_ROUTE_NOT_FOUND_TEXT: &str = "해당 버스 노선 정보를 찾지 못했어요 😢\n번호를 다시 한 번 확인해 주세요.";
pub const FAQ_CATEGORIES_EMPTY_TEXT: &str = "등록된 자주 묻는 질문 카테고리가 아직 없어요 😢";
pub const FAQ_SEARCH_PROMPT_TEXT: &str = "궁금한 내용을 자연스럽게 입력해 주세요 😊\n예) 갓바위 주차장 알려줘";

const ANSWER_PENDING_TEXT: &str = "답변 준비 중입니다. 조금만 기다려 주세요.";
const SPOT_DEFAULT_DESCRIPTION: &str = "관광지 정보입니다.";
const FACILITY_DEFAULT_DESCRIPTION: &str = "교통 및 편의정보입니다.";

/// Where generated links point: images and the map launcher are served by
/// this backend under `public_base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyContext {
    pub public_base_url: String,
    pub default_region_code: String,
}

impl ReplyContext {
    pub fn new(public_base_url: &str, default_region_code: &str) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            default_region_code: default_region_code.to_string(),
        }
    }

    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}/images/{file_name}", self.public_base_url)
    }

    pub fn map_launcher_url(&self, query: &str) -> String {
        format!(
            "{}/map/open?query={}",
            self.public_base_url,
            urlencoding::encode(query)
        )
    }
}

// === Shared pieces ===

fn home_quick_reply() -> QuickReply {
    QuickReply::message(HOME_LABEL, first_utterance(Menu::Main))
}

fn menu_quick_reply(label: &str, menu: Menu) -> QuickReply {
    QuickReply::message(label, first_utterance(menu))
}

/// Assembles a reply: the home shortcut first, then `quick_replies`, capped
/// at the platform limit.
pub fn reply(outputs: Vec<Output>, quick_replies: Vec<QuickReply>) -> SkillResponse {
    let mut all = Vec::with_capacity(quick_replies.len() + 1);
    all.push(home_quick_reply());
    all.extend(quick_replies.into_iter().filter(|q| q.label != HOME_LABEL));
    all.truncate(MAX_QUICK_REPLIES);
    SkillResponse::new(outputs, all)
}

pub fn text_reply(text: impl Into<String>, quick_replies: Vec<QuickReply>) -> SkillResponse {
    reply(vec![Output::text(text)], quick_replies)
}

pub fn unknown_intent() -> SkillResponse {
    text_reply(UNKNOWN_INTENT_TEXT, vec![])
}

pub fn system_error() -> SkillResponse {
    text_reply(SYSTEM_ERROR_TEXT, vec![])
}

/// DB text may carry escaped line breaks (a literal backslash followed by `n`).
fn normalize_text(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn bus_type_quick_replies() -> Vec<QuickReply> {
    vec![
        menu_quick_reply("간선버스", Menu::TransBusEdge),
        menu_quick_reply("순환버스", Menu::TransBusLoop),
        menu_quick_reply("지선버스", Menu::TransBusBranch),
    ]
}

fn travel_type_quick_replies() -> Vec<QuickReply> {
    vec![
        menu_quick_reply("테마형", Menu::TransRouteTheme),
        menu_quick_reply("출발지기준", Menu::TransRouteHub),
        menu_quick_reply("코스형", Menu::TransRouteCourse),
    ]
}

// === Static menus ===

pub fn main_menu(ctx: &ReplyContext, region: &RegionProfile) -> SkillResponse {
    #[rustfmt::skip]
    let entries = [
        ("관광지 안내", "문화유적·자연명소·축제 정보를 한눈에!", region.images.tour, "관광지 보러가기", Menu::TourMain),
        ("투어 프로그램 안내", "테마별 여행 코스를 편하게 즐겨보세요!", region.images.program, "투어 프로그램 보러가기", Menu::Programs),
        ("교통·편의정보", "주차장·버스·안내소 위치를 쉽게 찾아보세요.", region.images.transport, "교통·편의정보 보러가기", Menu::Transport),
        ("자주 묻는 질문", "여행 중 자주 물어보는 정보를 모았어요.", region.images.faq, "자주 묻는 질문 보러가기", Menu::QnaMain),
    ];

    let cards = entries
        .into_iter()
        .map(|(title, description, image, label, menu)| {
            BasicCard::new(title)
                .description(description)
                .thumbnail(ctx.image_url(image))
                .buttons(vec![Button::message(label, first_utterance(menu))])
        })
        .collect();

    reply(vec![Output::card_carousel(cards)], vec![])
}

pub fn tourist_spots_menu(region: &RegionProfile) -> SkillResponse {
    let card = BasicCard {
        description: Some(format!(
            "{}의 명소들을 소개해드릴게요!\n원하시는 관광지 유형을 선택해 주세요 👇",
            region.display_name
        )),
        ..BasicCard::default()
    }
    .buttons(vec![
        Button::message("문화유적/사찰", first_utterance(Menu::TourCulture)),
        Button::message("자연경관/산책명소", first_utterance(Menu::TourNature)),
        Button::message("축제·체험·볼거리", first_utterance(Menu::TourFestival)),
    ]);

    reply(vec![Output::BasicCard(card)], vec![])
}

pub fn transport_menu(region: &RegionProfile) -> SkillResponse {
    text_reply(
        format!(
            "이동이 편한 {} 여행!\n어디든 도와드릴게요 🚆🚌\n필요한 정보를 선택해 주세요 👇",
            region.display_name
        ),
        vec![
            menu_quick_reply("주차장", Menu::TransParking),
            menu_quick_reply("버스", Menu::TransBus),
            menu_quick_reply("관광안내소", Menu::TransCenter),
            menu_quick_reply("이동동선", Menu::TransRoute),
        ],
    )
}

pub fn bus_route_menu(region: &RegionProfile) -> SkillResponse {
    text_reply(
        format!(
            "{} 시내버스 정보를 안내해 드릴게요 🚌\n원하시는 노선 유형을 선택해 주세요 👇",
            region.display_name
        ),
        vec![
            menu_quick_reply("간선", Menu::TransBusEdge),
            menu_quick_reply("순환선", Menu::TransBusLoop),
            menu_quick_reply("지선", Menu::TransBusBranch),
        ],
    )
}

pub fn travel_route_menu(region: &RegionProfile) -> SkillResponse {
    text_reply(
        format!(
            "🧭 {} 여행 어디부터 갈지 고민되시나요?\n아래 이동 동선 유형 중 하나를 선택해 보세요!\n\
             원하는 스타일에 맞춰 추천 루트를 안내해 드릴게요 😊\n\n\
             📌 테마형 이동 동선\n🚉 출발지 기준 이동\n🗺 반나절·1일 코스형",
            region.display_name
        ),
        travel_type_quick_replies(),
    )
}

// === Tourist spots and facilities ===

fn place_description(summary: Option<&String>, address: Option<&String>) -> Option<String> {
    let mut lines = Vec::new();
    if let Some(summary) = non_blank(summary) {
        lines.push(summary.to_string());
    }
    if let Some(address) = non_blank(address) {
        lines.push(format!("📍 {address}"));
    }
    (!lines.is_empty()).then(|| lines.join("\n"))
}

fn place_buttons(ctx: &ReplyContext, spot: &tourist_spots::Model) -> Vec<Button> {
    let mut buttons = Vec::new();
    if let Some(url) = non_blank(spot.homepage_url.as_ref()) {
        buttons.push(Button::web_link("웹페이지 보기", url));
    }
    if let Some(address) = non_blank(spot.address.as_ref()) {
        buttons.push(Button::web_link("지도보기", ctx.map_launcher_url(address)));
    }
    if let Some(phone) = non_blank(spot.phone.as_ref()) {
        buttons.push(Button::phone("전화하기", phone));
    }
    buttons
}

pub fn tourist_spot_carousel(
    ctx: &ReplyContext,
    region: &RegionProfile,
    spots: &[tourist_spots::Model],
) -> SkillResponse {
    let other_types = vec![menu_quick_reply("다른 유형 보기", Menu::TourMain)];

    if spots.is_empty() {
        return text_reply(SPOTS_NOT_FOUND_TEXT, other_types);
    }

    let cards = spots
        .iter()
        .take(MAX_CAROUSEL_ITEMS)
        .map(|spot| {
            let image = non_blank(spot.main_image_url.as_ref())
                .map_or_else(|| ctx.image_url(region.images.tour), str::to_string);
            BasicCard::new(&spot.name_ko)
                .description(
                    place_description(spot.summary.as_ref(), spot.address.as_ref())
                        .unwrap_or_else(|| SPOT_DEFAULT_DESCRIPTION.to_string()),
                )
                .thumbnail(image)
                .buttons(place_buttons(ctx, spot))
        })
        .collect();

    reply(vec![Output::card_carousel(cards)], other_types)
}

/// Parking lots and information centres: like spots, but the thumbnail is
/// only shown when the row has its own image.
pub fn facility_carousel(ctx: &ReplyContext, spots: &[tourist_spots::Model]) -> SkillResponse {
    let other_types = vec![menu_quick_reply("다른 유형 보기", Menu::Transport)];

    if spots.is_empty() {
        return text_reply(FACILITIES_NOT_FOUND_TEXT, other_types);
    }

    let cards = spots
        .iter()
        .take(MAX_CAROUSEL_ITEMS)
        .map(|spot| {
            let card = BasicCard::new(&spot.name_ko)
                .description(
                    place_description(spot.summary.as_ref(), spot.address.as_ref())
                        .unwrap_or_else(|| FACILITY_DEFAULT_DESCRIPTION.to_string()),
                )
                .buttons(place_buttons(ctx, spot));
            match non_blank(spot.main_image_url.as_ref()) {
                Some(image) => card.thumbnail(image),
                None => card,
            }
        })
        .collect();

    reply(vec![Output::card_carousel(cards)], other_types)
}

// === Tour programs ===

fn city_tour_card(ctx: &ReplyContext, region: &RegionProfile) -> BasicCard {
    let tour = &region.city_tour;
    BasicCard::new(tour.title)
        .description(tour.description)
        .thumbnail(ctx.image_url(region.images.program_main))
        .buttons(vec![
            Button::phone("전화 예약", tour.phone),
            Button::web_link("온라인 예약", tour.reservation_url),
        ])
}

fn course_description(region: &RegionProfile, course: &tour_courses::Model) -> String {
    let mut lines = Vec::new();
    if let Some(kind) = non_blank(course.course_type.as_ref()) {
        lines.push(format!("📝 코스 구분: {kind}"));
    }
    if let Some(schedule) = non_blank(course.schedule_info.as_ref()) {
        lines.push(format!("🗓 운영 일정: {schedule}"));
    }
    if let Some(meeting_point) = non_blank(course.meeting_point.as_ref()) {
        lines.push(format!("📍 집결 장소: {meeting_point}"));
    }
    if let Some(detail) = non_blank(course.course_detail.as_ref()) {
        lines.push(format!("🚌 코스 안내\n{}", normalize_text(detail)));
    }
    if let Some(reservation) = non_blank(course.reservation_info.as_ref()) {
        lines.push(format!("💳 요금·예약: {}", normalize_text(reservation)));
    }

    if lines.is_empty() {
        format!("{}시티투어 코스입니다.", region.display_name)
    } else {
        lines.join("\n")
    }
}

pub fn tour_course_carousel(
    ctx: &ReplyContext,
    region: &RegionProfile,
    courses: &[tour_courses::Model],
) -> SkillResponse {
    if courses.is_empty() {
        return text_reply(
            format!(
                "현재 운영 중인 {} 시티투어 코스를 찾지 못했어요 😢\n\
                 잠시 후 다시 시도해 주시거나, {}으로 문의해 주세요.",
                region.display_name, region.city_tour.contact_name
            ),
            vec![],
        );
    }

    let cards = courses
        .iter()
        .take(MAX_CAROUSEL_ITEMS)
        .map(|course| {
            let image = non_blank(course.course_image_url.as_ref()).map_or_else(
                || ctx.image_url(region.images.program_main),
                str::to_string,
            );
            BasicCard::new(&course.course_name)
                .description(course_description(region, course))
                .thumbnail(image)
        })
        .collect();

    reply(
        vec![
            Output::BasicCard(city_tour_card(ctx, region)),
            Output::card_carousel(cards),
        ],
        vec![],
    )
}

// === Buses ===

/// Route numbers as quick replies; the number itself is the utterance that
/// opens the detail block. Numbers beyond the quick reply limit are dropped.
pub fn bus_route_quick_replies(route_type: &str, route_numbers: &[String]) -> SkillResponse {
    let type_label = bus_route_type_label(route_type);

    if route_numbers.is_empty() {
        return text_reply(
            format!("{type_label} 정보를 찾지 못했어요 😢\n다른 노선을 선택해 주세요."),
            bus_type_quick_replies(),
        );
    }

    if route_numbers.len() >= MAX_QUICK_REPLIES {
        warn!(
            route_type,
            count = route_numbers.len(),
            "More route numbers than quick reply slots, extra routes are hidden"
        );
    }

    let numbers = route_numbers
        .iter()
        .map(|number| QuickReply::message(number, number))
        .collect();

    text_reply(
        format!(
            "🚌 {type_label} 노선을 선택해 주세요.\n👉 번호를 누르시면 상세 정보를 안내해 드릴게요.😊"
        ),
        numbers,
    )
}

pub fn bus_route_detail(route: Option<&bus_routes::Model>) -> SkillResponse {
    let Some(route) = route else {
        return text_reply(
            BUS_ROUTE_NOT_FOUND_TEXT,
            vec![menu_quick_reply("버스정보", Menu::TransBus)],
        );
    };

    let type_label = bus_route_type_label(&route.route_type);

    let mut lines = vec![
        format!("🚍노선번호: {} ({type_label})", route.route_number),
        format!("🚩출발지: {}", route.origin_name),
        format!("🎯도착지: {}", route.destination_name),
    ];
    if let Some(interval) = non_blank(route.interval_info.as_ref()) {
        lines.push(format!("🔁배차간격: {interval}"));
    }
    let first = non_blank(route.first_bus_time.as_ref());
    let last = non_blank(route.last_bus_time.as_ref());
    if first.is_some() || last.is_some() {
        lines.push(format!(
            "🕒첫차/막차: {} ~ {}",
            first.unwrap_or("-"),
            last.unwrap_or("-")
        ));
    }

    let mut buttons = Vec::new();
    if let Some(url) = non_blank(route.weekday_timetable_url.as_ref()) {
        buttons.push(Button::web_link("평일 시간표", url));
    }
    if let Some(url) = non_blank(route.holiday_timetable_url.as_ref()) {
        buttons.push(Button::web_link("주말/공휴일 시간표", url));
    }
    if let Some(url) = non_blank(route.route_map_url.as_ref()) {
        buttons.push(Button::web_link("노선도 보기", url));
    }
    if buttons.is_empty() {
        buttons.push(Button::message("다른 노선 보기", first_utterance(Menu::TransBus)));
    }

    let card = BasicCard::new(format!("{}번", route.route_number))
        .description(normalize_text(&lines.join("\n")))
        .buttons(buttons);

    reply(vec![Output::BasicCard(card)], bus_type_quick_replies())
}

// === Travel routes ===

fn travel_route_card(route: &travel_routes::Model) -> BasicCard {
    let mut lines = Vec::new();
    if let Some(description) = non_blank(route.description.as_ref()) {
        lines.push(normalize_text(description));
    }
    let waypoints = route.waypoints();
    if !waypoints.is_empty() {
        lines.push(format!("🗺 경로: {}", waypoints.join(" → ")));
    }
    if let Some(total_time) = non_blank(route.total_time.as_ref()) {
        lines.push(format!("🕒 소요시간: {total_time}"));
    }
    if let Some(transport) = non_blank(route.transport_type.as_ref()) {
        lines.push(format!("🚍 이동수단: {transport}"));
    }

    let buttons = non_blank(route.map_url.as_ref())
        .map(|url| vec![Button::web_link("지도보기", url)])
        .unwrap_or_default();

    BasicCard::new(&route.title)
        .description(lines.join("\n"))
        .buttons(buttons)
}

pub fn travel_route_list(route_type: &str, routes: &[travel_routes::Model]) -> SkillResponse {
    if routes.is_empty() {
        return text_reply(
            format!(
                "{} 정보를 찾지 못했어요 😢\n다른 유형을 선택해 주세요.",
                travel_route_type_label(route_type)
            ),
            travel_type_quick_replies(),
        );
    }

    let cards = routes
        .iter()
        .take(MAX_CAROUSEL_ITEMS)
        .map(travel_route_card)
        .collect();

    reply(vec![Output::card_carousel(cards)], travel_type_quick_replies())
}

// === FAQ ===

pub fn faq_category_list(categories: &[faq_categories::Model]) -> SkillResponse {
    if categories.is_empty() {
        return text_reply(FAQ_CATEGORIES_EMPTY_TEXT, vec![]);
    }

    let cards = categories
        .iter()
        .take(MAX_CAROUSEL_ITEMS)
        .map(|category| {
            let code = category.category_code.as_str();
            let label = match faq_category_label(code) {
                unknown if unknown == code && !category.title.trim().is_empty() => {
                    category.title.trim()
                }
                known => known,
            };
            let utterance = faq_category_utterance(code);
            let buttons = if utterance.is_empty() {
                vec![]
            } else {
                vec![Button::message(format!("{label} 보기"), utterance)]
            };

            BasicCard::new(label)
                .description("해당 유형의 자주 묻는 질문을 확인할 수 있어요.")
                .buttons(buttons)
        })
        .collect();

    reply(vec![Output::card_carousel(cards)], vec![])
}

fn answer_or_pending(answer: Option<&String>) -> &str {
    non_blank(answer).unwrap_or(ANSWER_PENDING_TEXT)
}

/// All Q/A pairs of a category in one text bubble.
pub fn faq_list(category_code: &str, items: &[faqs::Model]) -> SkillResponse {
    let other_categories = vec![menu_quick_reply("다른 유형의 질문", Menu::QnaMain)];

    let entries: Vec<String> = items
        .iter()
        .filter(|f| !f.question.trim().is_empty())
        .take(MAX_CAROUSEL_ITEMS)
        .map(|f| {
            format!(
                "Q.{}\nA.{}",
                f.question.trim(),
                normalize_text(answer_or_pending(f.answer.as_ref()))
            )
        })
        .collect();

    if entries.is_empty() {
        return text_reply(
            format!(
                "{}에 대한 자주 묻는 질문이 아직 준비되지 않았어요 😢",
                faq_category_label(category_code)
            ),
            other_categories,
        );
    }

    text_reply(entries.join("\n\n"), other_categories)
}

pub fn faq_search_prompt() -> SkillResponse {
    text_reply(
        FAQ_SEARCH_PROMPT_TEXT,
        vec![menu_quick_reply("자주 묻는 질문", Menu::QnaMain)],
    )
}

pub fn faq_search_results(
    ctx: &ReplyContext,
    region: &RegionProfile,
    keyword: &str,
    hits: &[FaqSearchHit],
) -> SkillResponse {
    let faq_menu = vec![menu_quick_reply("자주 묻는 질문", Menu::QnaMain)];

    if hits.is_empty() {
        return text_reply(
            format!(
                "검색어 \"{keyword}\" 에 해당하는 자주 묻는 질문을 찾지 못했어요 😢\n\
                 표현을 조금 바꾸어 다시 질문해 보시거나,\n\
                 \"자주 묻는 질문\" 버튼을 눌러 카테고리별로 확인해 주세요."
            ),
            faq_menu,
        );
    }

    let cards = hits
        .iter()
        .take(MAX_CAROUSEL_ITEMS)
        .map(|hit| {
            let category = if hit.category_title.trim().is_empty() {
                hit.category_code.as_str()
            } else {
                hit.category_title.trim()
            };
            let mut lines = Vec::new();
            if !category.is_empty() {
                lines.push(format!("📂 카테고리: {category}"));
                lines.push(String::new());
            }
            lines.push(normalize_text(answer_or_pending(hit.answer.as_ref())));

            BasicCard::new(hit.question.trim())
                .description(lines.join("\n"))
                .thumbnail(ctx.image_url(region.images.faq))
                .buttons(vec![
                    Button::message(HOME_LABEL, first_utterance(Menu::Main)),
                    Button::message("다른 질문 하기", first_utterance(Menu::QnaSearch)),
                ])
        })
        .collect();

    reply(vec![Output::card_carousel(cards)], faq_menu)
}
