use std::time::Duration;

use url::Url;

use crate::logging::LogLevel;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/manpgrzg";
const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 10;
const DEFAULT_SUBMIT_RESTORE_MS: u64 = 3_000;
const DEFAULT_BANNER_VISIBLE_MS: u64 = 5_000;
const DEFAULT_BANNER_ENTER_MS: u64 = 100;
const DEFAULT_BANNER_EXIT_MS: u64 = 300;
const DEFAULT_TYPING_START_MS: u64 = 1_000;
const DEFAULT_TYPING_STEP_MS: u64 = 150;
const DEFAULT_FADE_IN_MS: u64 = 100;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLL_DEBOUNCE_MS_BOUNDS: (u64, u64) = (0, 1_000);
const SUBMIT_RESTORE_MS_BOUNDS: (u64, u64) = (500, 60_000);
const BANNER_VISIBLE_MS_BOUNDS: (u64, u64) = (1_000, 60_000);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub active_look_ahead: f64,
    pub reveal_offset: f64,
    pub progress_offset: f64,
    pub header_scrolled_after: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            active_look_ahead: 100.0,
            reveal_offset: 150.0,
            progress_offset: 200.0,
            header_scrolled_after: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub form_endpoint: Url,
    pub thresholds: ScrollThresholds,
    pub scroll_debounce: Duration,
    pub submit_restore: Duration,
    pub banner_enter: Duration,
    pub banner_visible: Duration,
    pub banner_exit: Duration,
    pub typing_start: Duration,
    pub typing_step: Duration,
    pub fade_in: Duration,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: default_form_endpoint(),
            thresholds: ScrollThresholds::default(),
            scroll_debounce: Duration::from_millis(DEFAULT_SCROLL_DEBOUNCE_MS),
            submit_restore: Duration::from_millis(DEFAULT_SUBMIT_RESTORE_MS),
            banner_enter: Duration::from_millis(DEFAULT_BANNER_ENTER_MS),
            banner_visible: Duration::from_millis(DEFAULT_BANNER_VISIBLE_MS),
            banner_exit: Duration::from_millis(DEFAULT_BANNER_EXIT_MS),
            typing_start: Duration::from_millis(DEFAULT_TYPING_START_MS),
            typing_step: Duration::from_millis(DEFAULT_TYPING_STEP_MS),
            fade_in: Duration::from_millis(DEFAULT_FADE_IN_MS),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    // `lookup` gets attribute names without the `data-` prefix.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let form_endpoint =
            parse_http_url(lookup("form-endpoint")).unwrap_or(defaults.form_endpoint);
        let scroll_debounce_ms = parse_u64_with_bounds(
            lookup("scroll-debounce-ms"),
            DEFAULT_SCROLL_DEBOUNCE_MS,
            SCROLL_DEBOUNCE_MS_BOUNDS,
        );
        let submit_restore_ms = parse_u64_with_bounds(
            lookup("submit-restore-ms"),
            DEFAULT_SUBMIT_RESTORE_MS,
            SUBMIT_RESTORE_MS_BOUNDS,
        );
        let banner_visible_ms = parse_u64_with_bounds(
            lookup("banner-visible-ms"),
            DEFAULT_BANNER_VISIBLE_MS,
            BANNER_VISIBLE_MS_BOUNDS,
        );
        let log_level = parse_log_level(lookup("log-level"), DEFAULT_LOG_LEVEL);

        Self {
            form_endpoint,
            scroll_debounce: Duration::from_millis(scroll_debounce_ms),
            submit_restore: Duration::from_millis(submit_restore_ms),
            banner_visible: Duration::from_millis(banner_visible_ms),
            log_level,
            ..defaults
        }
    }
}

fn default_form_endpoint() -> Url {
    Url::parse(DEFAULT_FORM_ENDPOINT).expect("default form endpoint is a valid URL")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    non_empty(value)
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_http_url(value: Option<String>) -> Option<Url> {
    let parsed = Url::parse(&non_empty(value)?).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match non_empty(value)
        .map(|value| value.to_ascii_lowercase())
        .as_deref()
    {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_attributes(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let config = config_from(&[]);

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.form_endpoint.as_str(), DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.scroll_debounce, Duration::from_millis(10));
        assert_eq!(config.submit_restore, Duration::from_secs(3));
    }

    #[test]
    fn in_range_overrides_are_applied() {
        let config = config_from(&[
            ("scroll-debounce-ms", " 25 "),
            ("submit-restore-ms", "1500"),
            ("log-level", "DEBUG"),
            ("form-endpoint", "https://forms.example.com/f/abc"),
        ]);

        assert_eq!(config.scroll_debounce, Duration::from_millis(25));
        assert_eq!(config.submit_restore, Duration::from_millis(1_500));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.form_endpoint.host_str(), Some("forms.example.com"));
    }

    #[test]
    fn out_of_range_and_malformed_values_fall_back() {
        let config = config_from(&[
            ("scroll-debounce-ms", "5000"),
            ("submit-restore-ms", "soon"),
            ("banner-visible-ms", "10"),
            ("log-level", "trace"),
            ("form-endpoint", "ftp://forms.example.com/f/abc"),
        ]);

        assert_eq!(config, SiteConfig::default());
    }
}
