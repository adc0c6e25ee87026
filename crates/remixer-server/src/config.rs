//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use remixer_core::credential::ApiKey;
use remixer_llm::chat::HttpChatTransport;
use remixer_llm::provider::Provider;
use remixer_llm::remix::{DEFAULT_TEMPERATURE, RemixEngine};
use remixer_panel::controller::PanelController;
use remixer_storage::postgrest::{self, DEFAULT_TABLE, PostgrestBackend};
use remixer_storage::store::SavedItemStore;
use serde::Serialize;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Errors name the offending variable, never its value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("failed to build {component} client: {reason}")]
    Client {
        component: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct RemixerConfig {
    pub provider: Provider,
    pub llm_api_key: ApiKey,
    pub model: String,
    pub llm_base_url: String,
    pub temperature: f32,
    pub store_url: String,
    pub store_key: ApiKey,
    pub table: String,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
}

/// Redacted config info safe to log.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub provider: String,
    pub model: String,
    pub llm_base_url: String,
    pub llm_key_hint: String,
    pub temperature: f32,
    pub store_url: String,
    pub store_key_hint: String,
    pub table: String,
    pub bind_addr: String,
    pub request_timeout_secs: u64,
}

impl RemixerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let provider = match get("REMIXER_LLM_PROVIDER") {
            Some(raw) => Provider::from_str(&raw).map_err(|_| ConfigError::Invalid {
                var: "REMIXER_LLM_PROVIDER",
                reason: "expected perplexity, openai or openrouter".to_string(),
            })?,
            None => Provider::default(),
        };

        let llm_api_key = required_key(&get, "REMIXER_LLM_API_KEY")?;
        let model = get("REMIXER_LLM_MODEL")
            .map(|m| m.trim().to_string())
            .unwrap_or_else(|| provider.default_model().to_string());
        let llm_base_url = match get("REMIXER_LLM_BASE_URL") {
            Some(raw) => http_url(&raw, "REMIXER_LLM_BASE_URL")?,
            None => provider.base_url().to_string(),
        };

        let temperature = match get("REMIXER_LLM_TEMPERATURE") {
            Some(raw) => parse_temperature(&raw)?,
            None => DEFAULT_TEMPERATURE,
        };

        let store_url = http_url(
            &get("SUPABASE_URL").ok_or(ConfigError::Missing {
                var: "SUPABASE_URL",
            })?,
            "SUPABASE_URL",
        )?;
        let store_key = required_key(&get, "SUPABASE_ANON_KEY")?;

        let table = get("REMIXER_TABLE")
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());
        postgrest::table_url(&store_url, &table).map_err(|_| ConfigError::Invalid {
            var: "REMIXER_TABLE",
            reason: "table names may only contain letters, digits and underscores".to_string(),
        })?;

        let bind_addr = get("REMIXER_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "REMIXER_BIND_ADDR",
                reason: e.to_string(),
            })?;

        let request_timeout = match get("REMIXER_REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            provider,
            llm_api_key,
            model,
            llm_base_url,
            temperature,
            store_url,
            store_key,
            table,
            bind_addr,
            request_timeout,
        })
    }

    pub fn info(&self) -> ConfigInfo {
        ConfigInfo {
            provider: self.provider.to_string(),
            model: self.model.clone(),
            llm_base_url: self.llm_base_url.clone(),
            llm_key_hint: self.llm_api_key.hint(),
            temperature: self.temperature,
            store_url: self.store_url.clone(),
            store_key_hint: self.store_key.hint(),
            table: self.table.clone(),
            bind_addr: self.bind_addr.to_string(),
            request_timeout_secs: self.request_timeout.as_secs(),
        }
    }

    /// Wire the HTTP clients into a ready controller.
    pub fn build_panel(&self) -> Result<PanelController, ConfigError> {
        let transport = HttpChatTransport::new(
            &self.llm_base_url,
            self.llm_api_key.clone(),
            self.request_timeout,
        )
        .map_err(|e| ConfigError::Client {
            component: "LLM",
            reason: e.to_string(),
        })?;
        let engine = RemixEngine::new(Arc::new(transport), self.model.clone())
            .with_temperature(Some(self.temperature));

        let backend = PostgrestBackend::new(
            &self.store_url,
            &self.table,
            self.store_key.clone(),
            self.request_timeout,
        )
        .map_err(|e| ConfigError::Client {
            component: "store",
            reason: e.to_string(),
        })?;
        let store = SavedItemStore::new(Arc::new(backend));

        Ok(PanelController::new(engine, store))
    }
}

fn required_key(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<ApiKey, ConfigError> {
    let raw = get(var).ok_or(ConfigError::Missing { var })?;
    ApiKey::parse(&raw).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

/// Absolute http(s) URL, returned without a trailing slash.
fn http_url(raw: &str, var: &'static str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            var,
            reason: "expected an http or https URL".to_string(),
        });
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn parse_temperature(raw: &str) -> Result<f32, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        var: "REMIXER_LLM_TEMPERATURE",
        reason: reason.to_string(),
    };
    let value: f32 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !(0.0..=2.0).contains(&value) {
        return Err(invalid("must be between 0.0 and 2.0"));
    }
    Ok(value)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        var: "REMIXER_REQUEST_TIMEOUT_SECS",
        reason: reason.to_string(),
    };
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("not a whole number of seconds"))?;
    if secs == 0 {
        return Err(invalid("must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
