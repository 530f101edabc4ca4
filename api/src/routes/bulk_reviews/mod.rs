pub mod bulk_reviews_request;
pub mod bulk_reviews_response;
pub mod bulk_reviews_route;
