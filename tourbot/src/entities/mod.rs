pub mod prelude;

pub mod bus_routes;
pub mod faq_categories;
pub mod faqs;
pub mod tour_courses;
pub mod tourist_spots;
pub mod travel_routes;
