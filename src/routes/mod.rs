use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

mod assets;
mod contact;
mod health;
mod index;

pub use assets::AssetsService;
pub use contact::RelayResponse;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: crate::mail::Mailer,
}

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate;

async fn fallback() -> impl IntoResponse {
    match NotFoundTemplate.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render 404 page: {err:?}");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
