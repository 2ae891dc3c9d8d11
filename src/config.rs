use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://api.vultr.com/v1";
pub const DEFAULT_API_KEY: &str = "";
pub const API_KEY_ENV: &str = "VULTR_API_KEY";
pub const API_ENDPOINT_ENV: &str = "VULTR_API_ENDPOINT";

/// Resolved settings used to build the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub api_base_url: String,
    /// Print a curl-equivalent line for every request
    pub verbose: bool,
}

impl Settings {
    /// Command-line values win over the environment.
    pub fn resolve(api_key: Option<String>, endpoint: Option<String>, verbose: bool) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(get_api_key);
        let api_base_url = endpoint
            .map(|e| sanitize_base_url(&e))
            .unwrap_or_else(get_api_base_url);
        Self {
            api_key,
            api_base_url,
            verbose,
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_key() -> String {
    env::var(API_KEY_ENV)
        .map(|k| k.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_API_KEY.to_string())
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var(API_ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
