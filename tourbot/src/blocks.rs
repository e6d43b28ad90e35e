//! Block registry shared with the bot builder.
//!
//! Each row ties a menu to the builder's block name (the intent name the
//! webhook receives), the category code used in the database, and the
//! utterances the builder routes to that block. Block names and utterances
//! must match the builder configuration; category codes must match the data.

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    Main,
    TourMain,
    TourCulture,
    TourNature,
    TourFestival,
    Programs,
    Transport,
    TransParking,
    TransCenter,
    TransRoute,
    TransRouteTheme,
    TransRouteHub,
    TransRouteCourse,
    TransBus,
    TransBusEdge,
    TransBusLoop,
    TransBusBranch,
    TransBusDetail,
    QnaMain,
    QnaTour,
    QnaTransport,
    QnaProgram,
    QnaFestival,
    QnaSearch,
}

/// Static menus render without touching the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticMenu {
    Main,
    TouristSpots,
    Transport,
    BusRoutes,
    TravelRoutes,
}

/// What a block does: exactly one query and template pair, or a static menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Static(StaticMenu),
    TouristSpots { category: &'static str },
    Facilities { category: &'static str },
    TourCourses,
    BusRouteNumbers { route_type: &'static str },
    BusRouteDetail,
    TravelRoutes { route_type: &'static str },
    FaqCategories,
    FaqsByCategory { category: &'static str },
    FaqSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub menu: Menu,
    pub block_name: &'static str,
    pub category: &'static str,
    pub utterances: &'static [&'static str],
}

#[rustfmt::skip]
pub static BLOCKS: &[Block] = &[
    Block { menu: Menu::Main, block_name: "main", category: "MAIN", utterances: &["처음으로", "시작", "처음"] },
    Block { menu: Menu::TourMain, block_name: "tourist_spots", category: "TOUR_MAIN", utterances: &["관광지 안내", "관광", "관광지", "관광지 안내 해줘"] },
    Block { menu: Menu::TourCulture, block_name: "tourist_spots_list_culture", category: "CULTURAL_TEMPLE", utterances: &["문화유적/사찰", "문화유적", "사찰"] },
    Block { menu: Menu::TourNature, block_name: "tourist_spots_list_nature", category: "NATURE_WALK", utterances: &["산책명소/자연경관", "산책명소", "자연경관"] },
    Block { menu: Menu::TourFestival, block_name: "tourist_spots_list_festival", category: "FESTIVAL_ACTIVITY", utterances: &["축제/체험/볼거리", "축제", "체험", "볼거리"] },
    Block { menu: Menu::Programs, block_name: "tour_programs_list", category: "PROGRAMS", utterances: &["투어 프로그램", "투어 프로그램 알려줘", "투어"] },
    Block { menu: Menu::Transport, block_name: "transport_info", category: "TRANSPORT", utterances: &["교통편의정보", "교통 및 편의 정보 알려줘", "편의정보", "교통정보"] },
    Block { menu: Menu::TransParking, block_name: "transport_info_list_parking", category: "PARKING", utterances: &["주차장 정보", "주차장", "주차장 알려줘"] },
    Block { menu: Menu::TransCenter, block_name: "transport_info_list_center", category: "INFORMATION", utterances: &["관광안내소 정보", "관광안내소", "관광안내소 알려줘"] },
    Block { menu: Menu::TransRoute, block_name: "transport_info_list_route", category: "ROUTE", utterances: &["이동동선", "이동동선 알려줘"] },
    Block { menu: Menu::TransRouteTheme, block_name: "transport_info_list_route_theme", category: "THEME", utterances: &["테마형 이동동선", "테마형"] },
    Block { menu: Menu::TransRouteHub, block_name: "transport_info_list_route_hub", category: "HUB", utterances: &["출발지기준 동선", "출발지기준"] },
    Block { menu: Menu::TransRouteCourse, block_name: "transport_info_list_route_course", category: "COURSE", utterances: &["코스형 이동동선", "코스형"] },
    Block { menu: Menu::TransBus, block_name: "transport_info_list_bus", category: "BUS", utterances: &["버스정보", "버스", "버스정보 알려줘"] },
    Block { menu: Menu::TransBusEdge, block_name: "transport_info_list_bus_edge", category: "EDGE", utterances: &["간선버스", "간선", "간선버스 알려줘"] },
    Block { menu: Menu::TransBusLoop, block_name: "transport_info_list_bus_loop", category: "LOOP", utterances: &["순환버스", "순환", "순환버스 알려줘"] },
    Block { menu: Menu::TransBusBranch, block_name: "transport_info_list_bus_branch", category: "BRANCH", utterances: &["지선버스", "지선", "지선버스 알려줘"] },
    // Reached through route-number utterances, so it has none of its own
    Block { menu: Menu::TransBusDetail, block_name: "transport_info_list_bus_detail", category: "BUS_DETAIL", utterances: &[] },
    Block { menu: Menu::QnaMain, block_name: "qna_list", category: "QNA_MAIN", utterances: &["자주 묻는 질문"] },
    Block { menu: Menu::QnaTour, block_name: "qna_list_tour", category: "QNA_TOUR", utterances: &["관광지 질문"] },
    Block { menu: Menu::QnaTransport, block_name: "qna_list_transport", category: "QNA_TRANSPORT", utterances: &["교통편의 질문"] },
    Block { menu: Menu::QnaProgram, block_name: "qna_list_program", category: "QNA_PROGRAM", utterances: &["투어 프로그램 질문"] },
    Block { menu: Menu::QnaFestival, block_name: "qna_list_festival", category: "QNA_FESTIVAL", utterances: &["축제행사 질문"] },
    Block { menu: Menu::QnaSearch, block_name: "qna_list_search", category: "QNA_SEARCH", utterances: &["질문할게 있어"] },
];

impl Block {
    pub fn by_name(block_name: &str) -> Option<&'static Block> {
        BLOCKS.iter().find(|b| b.block_name == block_name)
    }

    pub fn by_category(category: &str) -> Option<&'static Block> {
        BLOCKS.iter().find(|b| b.category == category)
    }

    pub fn by_menu(menu: Menu) -> Option<&'static Block> {
        BLOCKS.iter().find(|b| b.menu == menu)
    }
}

impl Menu {
    pub fn action(self) -> Action {
        match self {
            Menu::Main => Action::Static(StaticMenu::Main),
            Menu::TourMain => Action::Static(StaticMenu::TouristSpots),
            Menu::Transport => Action::Static(StaticMenu::Transport),
            Menu::TransBus => Action::Static(StaticMenu::BusRoutes),
            Menu::TransRoute => Action::Static(StaticMenu::TravelRoutes),
            Menu::TourCulture | Menu::TourNature | Menu::TourFestival => Action::TouristSpots {
                category: self.category(),
            },
            Menu::TransParking | Menu::TransCenter => Action::Facilities {
                category: self.category(),
            },
            Menu::Programs => Action::TourCourses,
            Menu::TransBusEdge | Menu::TransBusLoop | Menu::TransBusBranch => {
                Action::BusRouteNumbers {
                    route_type: self.category(),
                }
            }
            Menu::TransBusDetail => Action::BusRouteDetail,
            Menu::TransRouteTheme | Menu::TransRouteHub | Menu::TransRouteCourse => {
                Action::TravelRoutes {
                    route_type: self.category(),
                }
            }
            Menu::QnaMain => Action::FaqCategories,
            Menu::QnaTour | Menu::QnaTransport | Menu::QnaProgram | Menu::QnaFestival => {
                Action::FaqsByCategory {
                    category: self.category(),
                }
            }
            Menu::QnaSearch => Action::FaqSearch,
        }
    }

    pub fn category(self) -> &'static str {
        Block::by_menu(self).map_or("", |b| b.category)
    }
}

/// First utterance of a menu's block. "message" buttons send it so the
/// builder routes the user to that block. Empty when the block has none.
pub fn first_utterance(menu: Menu) -> String {
    match Block::by_menu(menu).and_then(|b| b.utterances.first()) {
        Some(utterance) => (*utterance).to_string(),
        None => {
            warn!(?menu, "No utterance registered, falling back to empty text");
            String::new()
        }
    }
}

/// Utterance that opens the FAQ list for a category code.
pub fn faq_category_utterance(category_code: &str) -> String {
    match Block::by_category(category_code) {
        Some(block) => first_utterance(block.menu),
        None => {
            warn!(category_code, "No block registered for FAQ category");
            String::new()
        }
    }
}

// === Labels ===

pub fn bus_route_type_label(route_type: &str) -> &'static str {
    match route_type {
        "EDGE" => "간선버스",
        "LOOP" => "순환버스",
        "BRANCH" => "지선버스",
        _ => "버스",
    }
}

pub fn travel_route_type_label(route_type: &str) -> &'static str {
    match route_type {
        "THEME" => "테마형 이동 동선",
        "HUB" => "출발지(허브) 기준 동선",
        "COURSE" => "반나절/1일 코스",
        _ => "이동 동선",
    }
}

/// Display label for a FAQ category code; unknown codes are shown as is.
pub fn faq_category_label(category_code: &str) -> &str {
    match category_code {
        "QNA_TOUR" => "관광 정보 안내",
        "QNA_TRANSPORT" => "교통 및 주차 안내",
        "QNA_PROGRAM" => "시티투어 · 투어 프로그램 안내",
        "QNA_FESTIVAL" => "축제 · 행사 안내",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_block_names_are_unique() {
        let names: HashSet<_> = BLOCKS.iter().map(|b| b.block_name).collect();
        assert_eq!(names.len(), BLOCKS.len());
    }

    #[test]
    fn test_each_menu_has_one_block() {
        let menus: HashSet<_> = BLOCKS.iter().map(|b| b.menu).collect();
        assert_eq!(menus.len(), BLOCKS.len());
    }

    #[test]
    fn test_utterances_do_not_collide_across_blocks() {
        let mut seen = HashSet::new();
        for utterance in BLOCKS.iter().flat_map(|b| b.utterances.iter()) {
            assert!(seen.insert(*utterance), "duplicate utterance {utterance}");
        }
    }

    #[test]
    fn test_query_actions_carry_the_block_category() {
        assert_eq!(
            Menu::TourCulture.action(),
            Action::TouristSpots {
                category: "CULTURAL_TEMPLE"
            }
        );
        assert_eq!(
            Menu::TransParking.action(),
            Action::Facilities { category: "PARKING" }
        );
        assert_eq!(
            Menu::TransBusLoop.action(),
            Action::BusRouteNumbers { route_type: "LOOP" }
        );
        assert_eq!(
            Menu::TransRouteHub.action(),
            Action::TravelRoutes { route_type: "HUB" }
        );
        assert_eq!(
            Menu::QnaFestival.action(),
            Action::FaqsByCategory {
                category: "QNA_FESTIVAL"
            }
        );
    }

    #[test]
    fn test_first_utterance() {
        assert_eq!(first_utterance(Menu::Main), "처음으로");
        assert_eq!(first_utterance(Menu::TransBusEdge), "간선버스");
        assert_eq!(first_utterance(Menu::TransBusDetail), "");
    }

    #[test]
    fn test_faq_category_utterance() {
        assert_eq!(faq_category_utterance("QNA_TRANSPORT"), "교통편의 질문");
        assert_eq!(faq_category_utterance("QNA_UNKNOWN"), "");
    }

    #[test]
    fn test_labels() {
        assert_eq!(bus_route_type_label("LOOP"), "순환버스");
        assert_eq!(bus_route_type_label("???"), "버스");
        assert_eq!(travel_route_type_label("COURSE"), "반나절/1일 코스");
        assert_eq!(travel_route_type_label(""), "이동 동선");
        assert_eq!(faq_category_label("QNA_TOUR"), "관광 정보 안내");
        assert_eq!(faq_category_label("QNA_OTHER"), "QNA_OTHER");
    }
}
