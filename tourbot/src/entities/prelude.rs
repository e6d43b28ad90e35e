pub use super::bus_routes::Entity as BusRoutes;
pub use super::faq_categories::Entity as FaqCategories;
pub use super::faqs::Entity as Faqs;
pub use super::tour_courses::Entity as TourCourses;
pub use super::tourist_spots::Entity as TouristSpots;
pub use super::travel_routes::Entity as TravelRoutes;
