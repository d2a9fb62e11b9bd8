//! Build-time configuration.
//!
//! Values are baked in when the wasm bundle is compiled, the same way the
//! browser has no process environment to read at runtime.

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AppConfig {
    /// Reads `MONEY_MANAGER_API_URL` and `MONEY_MANAGER_LOG` as they were set
    /// at compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("MONEY_MANAGER_API_URL"),
            option_env!("MONEY_MANAGER_LOG"),
        )
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string();

        Self {
            api_base_url,
            log_level,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
