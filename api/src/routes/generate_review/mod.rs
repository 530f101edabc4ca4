pub mod generate_review_request;
pub mod generate_review_response;
pub mod generate_review_route;
