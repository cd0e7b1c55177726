pub mod config;
pub mod error;
pub mod mail;
pub mod observability;
pub mod routes;

pub use mail::{ContactSubmission, Mailer};
pub use routes::AppState;

/// Create the app router
///
/// Builds the Axum router with all routes configured. Also used by
/// integration tests to drive the app without binding a socket.
pub fn create_app(config: config::Config, mailer: mail::Mailer) -> axum::Router {
    routes::router(AppState { config, mailer })
}
