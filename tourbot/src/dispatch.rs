//! Intent dispatch: one webhook request in, one skill response out.

use crate::blocks::{Action, Block, StaticMenu};
use crate::error::Result;
use crate::kakao::{SkillRequest, SkillResponse};
use crate::params::{REGION_CODE, ROUTE_NUMBER, param, param_or};
use crate::regions::RegionProfile;
use crate::repositories::{self, FAQ_SEARCH_LIMIT};
use crate::responses::{self, ReplyContext};
use sea_orm::DatabaseConnection;
use tracing::{debug, error, info, warn};

/// Answers a skill request. Never fails: unknown intents get the fallback
/// text and query errors are logged and answered with the apology text.
pub async fn dispatch(
    db: &DatabaseConnection,
    ctx: &ReplyContext,
    request: &SkillRequest,
) -> SkillResponse {
    let intent = request.intent_name();
    let region_code = param_or(request, REGION_CODE, &ctx.default_region_code);

    let Some(block) = Block::by_name(intent) else {
        warn!(intent, utterance = request.utterance(), "Unknown intent");
        return responses::unknown_intent();
    };

    info!(intent, region = %region_code, "Handling intent");

    match run_action(db, ctx, block, &region_code, request).await {
        Ok(response) => response,
        Err(e) => {
            error!(intent, region = %region_code, "Failed to answer intent: {}", e);
            responses::system_error()
        }
    }
}

async fn run_action(
    db: &DatabaseConnection,
    ctx: &ReplyContext,
    block: &Block,
    region_code: &str,
    request: &SkillRequest,
) -> Result<SkillResponse> {
    let region = RegionProfile::lookup(region_code);

    let response = match block.menu.action() {
        Action::Static(menu) => match menu {
            StaticMenu::Main => responses::main_menu(ctx, region),
            StaticMenu::TouristSpots => responses::tourist_spots_menu(region),
            StaticMenu::Transport => responses::transport_menu(region),
            StaticMenu::BusRoutes => responses::bus_route_menu(region),
            StaticMenu::TravelRoutes => responses::travel_route_menu(region),
        },
        Action::TouristSpots { category } => {
            let spots = repositories::get_tourist_spots(db, region_code, category).await?;
            debug!(category, count = spots.len(), "Loaded tourist spots");
            responses::tourist_spot_carousel(ctx, region, &spots)
        }
        Action::Facilities { category } => {
            let spots = repositories::get_tourist_spots(db, region_code, category).await?;
            debug!(category, count = spots.len(), "Loaded facilities");
            responses::facility_carousel(ctx, &spots)
        }
        Action::TourCourses => {
            let courses = repositories::get_tour_courses(db, region_code).await?;
            responses::tour_course_carousel(ctx, region, &courses)
        }
        Action::BusRouteNumbers { route_type } => {
            let numbers =
                repositories::get_bus_route_numbers_by_type(db, region_code, route_type).await?;
            responses::bus_route_quick_replies(route_type, &numbers)
        }
        Action::BusRouteDetail => {
            let route_number =
                param(request, ROUTE_NUMBER).unwrap_or_else(|| request.utterance().to_string());
            if route_number.is_empty() {
                responses::bus_route_detail(None)
            } else {
                let route =
                    repositories::get_bus_route_detail(db, region_code, &route_number).await?;
                responses::bus_route_detail(route.as_ref())
            }
        }
        Action::TravelRoutes { route_type } => {
            let routes =
                repositories::get_travel_routes(db, region_code, Some(route_type)).await?;
            responses::travel_route_list(route_type, &routes)
        }
        Action::FaqCategories => {
            let categories = repositories::get_faq_categories(db, region_code).await?;
            responses::faq_category_list(&categories)
        }
        Action::FaqsByCategory { category } => {
            let faqs = repositories::get_faqs_by_category(db, region_code, category).await?;
            responses::faq_list(category, &faqs)
        }
        Action::FaqSearch => {
            let keyword = request.utterance();
            // The block's own trigger phrase asks for the prompt, not a search
            if keyword.is_empty() || block.utterances.contains(&keyword) {
                responses::faq_search_prompt()
            } else {
                let hits =
                    repositories::search_faqs(db, region_code, keyword, FAQ_SEARCH_LIMIT).await?;
                debug!(keyword, count = hits.len(), "Searched FAQs");
                responses::faq_search_results(ctx, region, keyword, &hits)
            }
        }
    };

    Ok(response)
}
