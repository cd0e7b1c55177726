use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template render error: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Render(err) = &self;
        tracing::error!("Failed to render page: {err:?}");

        let template = ErrorPageTemplate {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: SERVER_ERROR_MESSAGE,
        };

        match template.render() {
            Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render error page: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}
