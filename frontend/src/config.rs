//! Application configuration.
//!
//! Centralized configuration for the Treasury Solutions frontend.
//! Defaults are hardcoded here; the API location and the mock/live switch
//! are baked in at build time from the environment trunk was run with.

use crate::workflow::StagingConfig;

/// Default backend API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application name shown in the sidebar and header.
pub const APP_NAME: &str = "Treasury Solutions";

/// Version label shown in the sidebar footer.
pub const APP_VERSION: &str = "v1.0";

/// Maximum file size for a staged statement (in bytes).
///
/// 10 MiB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum number of statements staged for one upload.
pub const MAX_FILES: usize = 5;

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 5;

/// How long a toast stays visible (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Which [`DataSource`](crate::services::DataSource) the app talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSourceKind {
    /// Remote treasury API over HTTP.
    Live,
    /// Static fixtures, no network.
    Mock,
}

/// Runtime configuration, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the treasury API (no trailing slash).
    pub api_base_url: String,
    /// Live API or mock fixtures.
    pub data_source: DataSourceKind,
    /// Limits applied by the file staging area.
    pub staging: StagingConfig,
}

impl AppConfig {
    /// Build the configuration from `TREASURY_API_URL` and
    /// `TREASURY_USE_MOCK_DATA` as they were set at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TREASURY_API_URL"),
            option_env!("TREASURY_USE_MOCK_DATA"),
        )
    }

    /// Parse raw configuration values.
    ///
    /// Mock data is only used when the flag is exactly `true`.
    pub fn from_values(api_url: Option<&str>, use_mock: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let data_source = match use_mock.map(str::trim) {
            Some("true") => DataSourceKind::Mock,
            _ => DataSourceKind::Live,
        };

        Self {
            api_base_url,
            data_source,
            staging: StagingConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
