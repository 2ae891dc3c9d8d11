use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use yansi::Paint;

use crate::config::Settings;
use crate::error::CliError;

const API_KEY_HEADER: &str = "API-Key";

/// HTTP client for the Vultr v1 API.
///
/// Built once per process from [`Settings`] and shared by every command.
pub struct VultrClient {
    client: reqwest::Client,
    api_base_url: String,
    api_key: String,
    verbose: bool,
}

impl VultrClient {
    pub fn new(settings: &Settings) -> Result<Self, CliError> {
        if settings.api_key.trim().is_empty() {
            return Err(CliError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .user_agent(format!("vultr-cli/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_base_url: settings.api_base_url.clone(),
            api_key: settings.api_key.clone(),
            verbose: settings.verbose,
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub(crate) async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, CliError> {
        let url = self.url(endpoint);
        self.log_request(&Method::GET, &url, params);
        let request = self.client.get(&url).query(params);
        self.send(request, &Method::GET, endpoint).await
    }

    pub(crate) async fn post(&self, endpoint: &str, form: &[(&str, String)]) -> Result<Value, CliError> {
        let url = self.url(endpoint);
        self.log_request(&Method::POST, &url, form);
        let request = self.client.post(&url).form(form);
        self.send(request, &Method::POST, endpoint).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base_url, endpoint.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder, method: &Method, endpoint: &str) -> Result<Value, CliError> {
        tracing::debug!(%method, endpoint, "sending API request");
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%method, endpoint, status = status.as_u16(), bytes = text.len(), "API response received");

        if !status.is_success() {
            return Err(CliError::api(status.as_u16(), &text));
        }
        // Action endpoints answer with an empty body.
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn log_request(&self, method: &Method, url: &str, fields: &[(&str, String)]) {
        if !self.verbose {
            return;
        }
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new(format!("'{}: {}'", API_KEY_HEADER, mask_key(&self.api_key))).fg(yansi::Color::Magenta)
        ));
        let flag = if *method == Method::GET { "--get --data-urlencode" } else { "--data-urlencode" };
        for (key, value) in fields {
            let escaped = value.replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new(flag).fg(yansi::Color::Blue),
                Paint::new(format!("'{}={}'", key, escaped)).fg(yansi::Color::White)
            ));
        }
        eprintln!("Request:\n{}", parts.join(" "));
    }
}

/// Keeps the last four characters of a key visible.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
