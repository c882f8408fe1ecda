// --- File: crates/calendso_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. "secret_from_env" resolved from DATABASE_URL
    /// Create the user/event type tables on startup. Local development only.
    #[serde(default)]
    pub init_schema: bool,
}

// --- Site / Branding Config ---
// Everything the profile page needs to build titles and social preview tags.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Used for `og:url` and `twitter:url`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Image generation service the preview caption is appended to.
    #[serde(default = "default_og_image_base")]
    pub og_image_base: String,
    #[serde(default = "default_logo_url")]
    pub logo_url: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_app_name() -> String {
    "Calendso".to_string()
}

fn default_base_url() -> String {
    "https://calendso/".to_string()
}

fn default_og_image_base() -> String {
    "https://og-image-one-pi.vercel.app/".to_string()
}

fn default_logo_url() -> String {
    "https://calendso.com/calendso-logo-white.svg".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            base_url: default_base_url(),
            og_image_base: default_og_image_base(),
            logo_url: default_logo_url(),
            static_dir: default_static_dir(),
        }
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error. Defaults to info.
    pub level: Option<String>,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: None,
            site: SiteConfig::default(),
            logging: None,
        }
    }
}
