//! Shared helpers for router-level tests.

#![allow(dead_code)]

use monkeymadness::config::{Config, ContactConfig, LoggingConfig, ServerConfig, SmtpConfig};
use monkeymadness::mail::Mailer;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 1025,
            username: "test@example.com".to_string(),
            password: "test".to_string(),
            timeout_seconds: 5,
        },
        contact: ContactConfig {
            recipient: "info@monkeymadness.in".to_string(),
            from_name: "Monkey Madness".to_string(),
            expose_errors: true,
        },
        logging: LoggingConfig::default(),
    }
}

pub fn test_app(mailer: Mailer) -> axum::Router {
    monkeymadness::create_app(test_config(), mailer)
}

pub fn test_app_with_config(config: Config, mailer: Mailer) -> axum::Router {
    monkeymadness::create_app(config, mailer)
}
