use axum::http::header;
use axum::response::IntoResponse;

pub mod assessments;
pub mod auth;
pub mod health;
pub mod shared;

/// First 8 characters of an assessment id, embedded in download filenames.
pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub(crate) fn pdf_attachment(filename: &str, bytes: Vec<u8>) -> impl IntoResponse + use<> {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
}
