//! Loader configuration parsed from environment variables.

use crate::i18n::Language;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_COLLECTION: &str = "students";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL '{0}': expected an http(s) URL")]
    InvalidBaseUrl(String),
    #[error("invalid collection '{0}': expected a single path segment")]
    InvalidCollection(String),
    #[error("unsupported language '{0}' (expected 'lt' or 'en')")]
    UnknownLanguage(String),
    #[error("{name} must be at least 1 second")]
    ZeroTimeout { name: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Backend origin without trailing slash.
    pub base_url: String,
    /// Path segment in `/api/{collection}/{id}/documents`.
    pub collection: String,
    pub language: Language,
    /// Raw `Cookie` header value forwarded with every request.
    pub session_cookie: Option<String>,
    pub timeouts: Timeouts,
}

impl LoaderConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `THESIS_DOCS_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `THESIS_DOCS_COLLECTION`: default `students`
    /// - `THESIS_DOCS_LANG`: `lt` (default) or `en`
    /// - `THESIS_DOCS_SESSION_COOKIE`: unset by default
    /// - `THESIS_DOCS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `THESIS_DOCS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a set value does not validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("THESIS_DOCS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let collection = std::env::var("THESIS_DOCS_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());
        let language = std::env::var("THESIS_DOCS_LANG").unwrap_or_else(|_| Language::default().code().to_string());
        let session_cookie = std::env::var("THESIS_DOCS_SESSION_COOKIE").ok();
        let timeouts = Timeouts {
            request_secs: env_parse("THESIS_DOCS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("THESIS_DOCS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self::from_parts(&base_url, &collection, &language, session_cookie, timeouts)
    }

    /// Validate and normalize raw settings.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-http(s) base URL, a collection that is not a
    /// single path segment, an unknown language or a zero timeout.
    pub fn from_parts(
        base_url: &str,
        collection: &str,
        language: &str,
        session_cookie: Option<String>,
        timeouts: Timeouts,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            collection: parse_collection(collection)?,
            language: Language::parse(language).ok_or_else(|| ConfigError::UnknownLanguage(language.to_owned()))?,
            session_cookie: session_cookie.filter(|c| !c.trim().is_empty()),
            timeouts: check_timeouts(timeouts)?,
        })
    }

    /// Apply explicitly given settings on top of this config, validating the
    /// result the same way as [`LoaderConfig::from_parts`].
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not validate.
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let language = overrides.language.unwrap_or_else(|| self.language.code().to_owned());
        Self::from_parts(
            overrides.base_url.as_deref().unwrap_or(&self.base_url),
            overrides.collection.as_deref().unwrap_or(&self.collection),
            &language,
            overrides.session_cookie.or(self.session_cookie),
            Timeouts {
                request_secs: overrides.request_secs.unwrap_or(self.timeouts.request_secs),
                connect_secs: overrides.connect_secs.unwrap_or(self.timeouts.connect_secs),
            },
        )
    }
}

/// Settings given explicitly, e.g. on the command line. `None` keeps the
/// value already configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub collection: Option<String>,
    pub language: Option<String>,
    pub session_cookie: Option<String>,
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
            language: Language::default(),
            session_cookie: None,
            timeouts: Timeouts::default(),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed).map_err(|_| ConfigError::InvalidBaseUrl(raw.to_owned()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn check_timeouts(timeouts: Timeouts) -> Result<Timeouts, ConfigError> {
    if timeouts.request_secs == 0 {
        return Err(ConfigError::ZeroTimeout { name: "request timeout" });
    }
    if timeouts.connect_secs == 0 {
        return Err(ConfigError::ZeroTimeout { name: "connect timeout" });
    }
    Ok(timeouts)
}

fn parse_collection(raw: &str) -> Result<String, ConfigError> {
    let valid = !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid { Ok(raw.to_owned()) } else { Err(ConfigError::InvalidCollection(raw.to_owned())) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
