use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use lettre::message::Mailbox;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Credentials and connection settings for the outbound mail account.
#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Mail account identifier; also used as the From address.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Bound on the connection check and the send, so an unresponsive
    /// relay cannot hold a request open indefinitely.
    #[serde(default = "default_smtp_timeout")]
    pub timeout_seconds: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            timeout_seconds: default_smtp_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Fixed destination address; every submission lands here.
    #[serde(default)]
    pub recipient: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// When on, the 500 response body carries the underlying error text.
    /// Turn off in deployments that must not expose transport internals.
    #[serde(default = "default_expose_errors")]
    pub expose_errors: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            from_name: default_from_name(),
            expose_errors: default_expose_errors(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_smtp_timeout() -> u64 {
    30
}

fn default_from_name() -> String {
    "Monkey Madness".to_string()
}

fn default_expose_errors() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (EMAIL_USER, EMAIL_PASS, EMAIL_RECIPIENT)
    /// 2. Prefixed environment variables (MONKEYMADNESS__SMTP__HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults and env vars can carry everything
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MONKEYMADNESS")
                .separator("__")
                .try_parsing(true),
        );

        // The original deployment configured the mail account through these
        // unprefixed variables; keep honoring them.
        if let Ok(username) = env::var("EMAIL_USER") {
            builder = builder.set_override("smtp.username", username)?;
        }
        if let Ok(password) = env::var("EMAIL_PASS") {
            builder = builder.set_override("smtp.password", password)?;
        }
        if let Ok(recipient) = env::var("EMAIL_RECIPIENT") {
            builder = builder.set_override("contact.recipient", recipient)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Runs once at process start; a broken mail account or recipient must
    /// abort startup rather than surface on the first submission.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.smtp.username.is_empty() {
            return Err("smtp.username (mail account) must be configured".to_string());
        }
        if self.smtp.password.is_empty() {
            return Err("smtp.password (mail account secret) must be configured".to_string());
        }
        if self.smtp.timeout_seconds == 0 {
            return Err("smtp.timeout_seconds must be at least 1".to_string());
        }
        if self.contact.recipient.is_empty() {
            return Err("contact.recipient must be configured".to_string());
        }
        if let Err(e) = self.contact.recipient.parse::<Mailbox>() {
            return Err(format!("contact.recipient is not a valid address: {e}"));
        }
        Ok(())
    }
}
