use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::instrument;

/// Template downloaded by clients preparing a bulk upload.
const SAMPLE_CSV: &str = "\
githubUrl,teamName\n\
https://github.com/expressjs/express,Team Alpha\n\
https://github.com/facebook/react,Team Beta\n\
https://github.com/rust-lang/rust,\n";

/// HTTP endpoint serving the bulk-upload sample CSV.
#[instrument(name = "sample_csv_route")]
pub async fn sample_csv_route() -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"bulk-reviews-sample.csv\"",
            ),
        ],
        SAMPLE_CSV,
    )
        .into_response()
}
