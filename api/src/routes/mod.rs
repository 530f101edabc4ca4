pub mod bulk_reviews;
pub mod delete_review_route;
pub mod generate_review;
pub mod get_review_route;
pub mod list_reviews_route;
pub mod review_dto;
pub mod sample_csv_route;
pub mod stats_route;
pub mod team_reviews_route;
