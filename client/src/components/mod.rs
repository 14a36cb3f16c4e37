pub mod call_to_action;
pub mod dashboards;
pub mod faq;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod protected_route;
pub mod testimonials;
pub mod use_cases;
