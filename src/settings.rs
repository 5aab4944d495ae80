use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::{env, fmt, str::FromStr};
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

impl AppEnvironment {
    /// Reads `APP_ENV`, falling back to development when unset or unknown.
    pub fn current() -> Self {
        env::var("APP_ENV")
            .ok()
            .and_then(|raw| AppEnvironment::from_str(&raw).ok())
            .unwrap_or(AppEnvironment::Development)
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    #[serde(default)]
    pub db_user: String,

    #[serde(default)]
    pub db_password: String,

    #[serde(default)]
    pub db_name: String,

    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub webhook_url: Option<String>,

    #[serde(default = "default_post_base_url")]
    pub post_base_url: String,

    #[serde(default)]
    pub basic_auth_user: String,

    #[serde(default)]
    pub basic_auth_password: String,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Showcase-API".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_db_port() -> u16 {
    5432
}
fn default_db_max_connections() -> u32 {
    10
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_post_base_url() -> String {
    "https://estebandev.xyz/blog/posts".to_string()
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Unprefixed names are what existing deployments already export
        config.db_host = fill_or_env(config.db_host, "DB_HOST")?;
        config.db_user = fill_or_env(config.db_user, "DB_USER")?;
        config.db_password = fill_or_env(config.db_password, "DB_PASSWORD")?;
        config.db_name = fill_or_env(config.db_name, "DB_NAME")?;
        config.basic_auth_user = fill_or_env(config.basic_auth_user, "BASIC_AUTH_USER")?;
        config.basic_auth_password = fill_or_env(config.basic_auth_password, "BASIC_AUTH_PASSWORD")?;

        if let Some(port) = parse_env::<u16>("DB_PORT")? {
            if env::var("APP_DB_PORT").is_err() {
                config.db_port = port;
            }
        }
        if let Some(port) = parse_env::<u16>("PORT")? {
            if env::var("APP_PORT").is_err() {
                config.port = port;
            }
        }
        if config.webhook_url.is_none() {
            config.webhook_url = env::var("WEBHOOK_URL").ok().filter(|u| !u.trim().is_empty());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.db_host.trim().is_empty() {
            errors.push("DB_HOST cannot be empty");
        }
        if self.db_user.trim().is_empty() {
            errors.push("DB_USER cannot be empty");
        }
        if self.db_name.trim().is_empty() {
            errors.push("DB_NAME cannot be empty");
        }
        if self.basic_auth_user.is_empty() || self.basic_auth_password.is_empty() {
            errors.push("BASIC_AUTH_USER and BASIC_AUTH_PASSWORD must be set");
        }
        if let Some(webhook) = &self.webhook_url {
            if Url::parse(webhook).is_err() {
                errors.push("WEBHOOK_URL must be a valid URL");
            }
        }
        if Url::parse(&self.post_base_url).is_err() {
            errors.push("POST_BASE_URL must be a valid URL");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

fn fill_or_env(current: String, env_key: &str) -> Result<String, ConfigError> {
    if current.trim().is_empty() {
        env::var(env_key).map_err(|_| ConfigError::Message(format!("{env_key} must be set")))
    } else {
        Ok(current)
    }
}

fn parse_env<T: FromStr>(env_key: &str) -> Result<Option<T>, ConfigError> {
    match env::var(env_key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Message(format!("{env_key} is not a valid value: {raw}"))),
        _ => Ok(None),
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &self.db_password.redact())
            .field("db_name", &self.db_name)
            .field("db_max_connections", &self.db_max_connections)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("webhook_url", &self.webhook_url.as_deref().map(|u| u.redact()))
            .field("post_base_url", &self.post_base_url)
            .field("basic_auth_user", &self.basic_auth_user.redact())
            .field("basic_auth_password", &self.basic_auth_password.redact())
            .finish()
    }
}
