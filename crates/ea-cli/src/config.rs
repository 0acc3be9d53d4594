//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use ea_core::{Classifier, ValidationError, WindowPolicy, parse_time_of_day, parse_time_zone};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Zone used when neither the config nor the system names one we know.
pub const FALLBACK_TIMEZONE: &str = "Europe/London";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// IANA time zone. Defaults to the system zone.
    pub timezone: Option<String>,

    /// Start of bookable hours on future days (`HH:MM`).
    pub workday_start: String,

    /// End of bookable hours on future days (`HH:MM`).
    pub workday_end: String,

    /// Latest end of today's bookable window (`HH:MM`).
    pub today_cutoff: String,

    /// Extra classifier keywords.
    pub classifier: ClassifierConfig,
}

/// Keywords appended to the stock classifier rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub meeting: Vec<String>,
    pub explicit_task: Vec<String>,
    pub general_task: Vec<String>,
    pub personal_activity: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            workday_start: "09:00".to_string(),
            workday_end: "17:00".to_string(),
            today_cutoff: "20:00".to_string(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (EA_*)
        figment = figment.merge(Env::prefixed("EA_"));

        figment.extract()
    }

    /// Resolves the configured zone, falling back to the system zone and
    /// then to [`FALLBACK_TIMEZONE`].
    ///
    /// An explicitly configured zone that does not exist is an error.
    pub fn time_zone(&self) -> Result<Tz, ValidationError> {
        if let Some(name) = &self.timezone {
            return parse_time_zone(name);
        }

        match iana_time_zone::get_timezone() {
            Ok(name) => parse_time_zone(&name).or_else(|err| {
                tracing::warn!(%err, fallback = FALLBACK_TIMEZONE, "system time zone not recognised");
                parse_time_zone(FALLBACK_TIMEZONE)
            }),
            Err(err) => {
                tracing::warn!(%err, fallback = FALLBACK_TIMEZONE, "could not detect system time zone");
                parse_time_zone(FALLBACK_TIMEZONE)
            }
        }
    }

    /// Business-hour template for the slot search.
    pub fn window_policy(&self) -> Result<WindowPolicy, ValidationError> {
        WindowPolicy::new(
            parse_time_of_day("workday_start", &self.workday_start)?,
            parse_time_of_day("workday_end", &self.workday_end)?,
            parse_time_of_day("today_cutoff", &self.today_cutoff)?,
        )
    }

    /// Stock classifier with configured keywords appended.
    pub fn classifier(&self) -> Classifier {
        let mut classifier = Classifier::default();
        let extras = [
            ("meeting", &self.classifier.meeting),
            ("explicit_task", &self.classifier.explicit_task),
            ("general_task", &self.classifier.general_task),
            ("personal_activity", &self.classifier.personal_activity),
        ];
        for (name, keywords) in extras {
            if let Some(rule) = classifier.rule_mut(name) {
                rule.extend(keywords);
            }
        }
        classifier
    }
}

/// Returns the platform-specific config directory for ea.
///
/// On Linux: `~/.config/ea`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ea"))
}
