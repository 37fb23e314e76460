use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_LESSON_TIME: &str = "09:00";

/// Build-time application settings.
///
/// Read from `TUTTI_API_URL` and `TUTTI_LOG_LEVEL` when the bundle is
/// compiled; unset or unreadable values fall back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Initial value of the student form's default lesson time
    pub default_lesson_time: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TUTTI_API_URL"), option_env!("TUTTI_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            log_level,
            default_lesson_time: DEFAULT_LESSON_TIME.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
