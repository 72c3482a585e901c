use crate::{
    core::timer::DEFAULT_THINKING_DELAY,
    error::{PlannerError, Result},
    theme::Theme,
    types::itinerary::TripRequest,
};
use std::time::Duration;

/// Environment variable holding the thinking delay in milliseconds
pub const THINKING_DELAY_ENV: &str = "TRIP_PLANNER_THINKING_MS";
/// Any non-empty value disables ANSI colours. `NO_COLOR` is honoured by the
/// colour backend itself.
pub const NO_COLOR_ENV: &str = "TRIP_PLANNER_NO_COLOR";

/// Planner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub thinking_delay: Duration,
    pub theme: Theme,
    /// Request the planner form starts from and returns to after a reset
    pub default_request: TripRequest,
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self {
            thinking_delay: DEFAULT_THINKING_DELAY,
            theme: Theme::light(),
            default_request: TripRequest::default(),
        }
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.theme.ansi = enabled;
        self
    }

    pub fn with_default_request(mut self, request: TripRequest) -> Self {
        self.default_request = request;
        self
    }

    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new().with_color(true);

        if let Some(raw) = lookup(THINKING_DELAY_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                PlannerError::Config(format!(
                    "{} must be a whole number of milliseconds, got `{}`",
                    THINKING_DELAY_ENV, raw
                ))
            })?;
            config.thinking_delay = Duration::from_millis(millis);
        }

        if lookup(NO_COLOR_ENV).is_some_and(|value| !value.is_empty()) {
            config.theme.ansi = false;
        }

        Ok(config)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.thinking_delay, Duration::from_millis(3000));
        assert!(!config.theme.ansi);
        assert_eq!(config.default_request, TripRequest::default());
    }

    #[test]
    fn test_from_lookup_reads_delay_and_color() {
        let config =
            PlannerConfig::from_lookup(lookup_from(&[(THINKING_DELAY_ENV, "250")])).unwrap();
        assert_eq!(config.thinking_delay, Duration::from_millis(250));
        assert!(config.theme.ansi);

        let config = PlannerConfig::from_lookup(lookup_from(&[(NO_COLOR_ENV, "1")])).unwrap();
        assert!(!config.theme.ansi);

        let config = PlannerConfig::from_lookup(lookup_from(&[(NO_COLOR_ENV, "")])).unwrap();
        assert!(config.theme.ansi);
    }

    #[test]
    fn test_from_lookup_rejects_bad_delay() {
        let err = PlannerConfig::from_lookup(lookup_from(&[(THINKING_DELAY_ENV, "soon")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("soon"));
    }
}
