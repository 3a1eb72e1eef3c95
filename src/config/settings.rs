//! Job document structures for deserialisation.
//!
//! These structures map directly to the JSON job file format.

use serde::{Deserialize, Serialize};

use crate::device::ComponentSpec;
use crate::error::ConfigError;
use crate::layout::{CustomTemplate, LayoutTemplate};

/// Root of a job document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default, skip_serializing)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default, skip_serializing)]
    _comment: Option<String>,

    /// Document title, also used for the default output file name.
    #[serde(default = "default_title")]
    pub title: String,

    /// Sheet layout.
    #[serde(default)]
    pub layout: LayoutSelector,

    /// Rendering switches.
    #[serde(default)]
    pub options: RenderOptions,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Labels in print order; `null` leaves a slot blank.
    pub labels: Vec<Option<ComponentSpec>>,
}

impl JobConfig {
    /// A job with default settings.
    #[must_use]
    pub fn new(labels: Vec<Option<ComponentSpec>>) -> Self {
        Self {
            _schema: None,
            _comment: None,
            title: default_title(),
            layout: LayoutSelector::default(),
            options: RenderOptions::default(),
            logging: LoggingConfig::default(),
            labels,
        }
    }

    /// Validates the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is unknown or does not fit its page,
    /// or if the log level is not recognised.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            });
        }

        self.layout.template()?;
        Ok(())
    }

    /// Number of non-blank label entries.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.iter().flatten().count()
    }
}

fn default_title() -> String {
    "Component Labels".to_string()
}

/// A built-in template name or an inline template.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LayoutSelector {
    /// Built-in template identifier.
    Named(String),
    /// Inline template in millimetres.
    Custom(CustomTemplate),
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self::Named("AVERY_L7144".to_string())
    }
}

impl LayoutSelector {
    /// Resolves and validates the template.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLayout`] or
    /// [`ConfigError::InvalidLayout`].
    pub fn template(&self) -> Result<LayoutTemplate, ConfigError> {
        match self {
            Self::Named(name) => LayoutTemplate::named(name),
            Self::Custom(custom) => custom.to_template(),
        }
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Draw cell and sub-region frames for print alignment.
    #[serde(default)]
    pub draw_outlines: bool,

    /// Draw package bodies as outlines without fills.
    #[serde(default)]
    pub outline_packages: bool,

    /// Name the leads of polarised parts and transistors.
    #[serde(default = "default_pin_labels")]
    pub pin_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            draw_outlines: false,
            outline_packages: false,
            pin_labels: default_pin_labels(),
        }
    }
}

const fn default_pin_labels() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_job() {
        let json = r#"{"labels": []}"#;
        let job: JobConfig = serde_json::from_str(json).unwrap();
        assert!(job.validate().is_ok());
        assert_eq!(job.title, "Component Labels");
        assert_eq!(job.layout, LayoutSelector::Named("AVERY_L7144".to_string()));
        assert!(!job.options.draw_outlines);
        assert!(job.options.pin_labels);
    }

    #[test]
    fn pin_labels_can_be_turned_off() {
        let json = r#"{"labels": [], "options": {"pin_labels": false}}"#;
        let job: JobConfig = serde_json::from_str(json).unwrap();
        assert!(!job.options.pin_labels);
        assert!(!job.options.outline_packages);
        assert!(RenderOptions::default().pin_labels);
    }

    #[test]
    fn parse_full_job() {
        let json = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "_comment": "Drawer 3",
            "title": "Small signal",
            "layout": "AVERY_5260",
            "options": { "draw_outlines": true, "outline_packages": true },
            "logging": { "level": "debug" },
            "labels": [
                { "kind": "resistor", "value_ohms": 4700 },
                null,
                { "kind": "diode", "subtype": "zener", "part_number": "BZX79C5V1",
                  "package": "DO-35@glass", "spec": { "vz": "5.1V", "pd": "500mW" } }
            ]
        }"#;

        let job: JobConfig = serde_json::from_str(json).unwrap();
        assert!(job.validate().is_ok());
        assert_eq!(job.title, "Small signal");
        assert!(job.options.draw_outlines && job.options.outline_packages);
        assert_eq!(job.labels.len(), 3);
        assert!(job.labels[1].is_none());
        assert_eq!(job.label_count(), 2);
        let zener = job.labels[2].as_ref().unwrap();
        let keys: Vec<&str> = zener.spec.keys().map(String::as_str).collect();
        assert_eq!(keys, ["vz", "pd"]);
    }

    #[test]
    fn inline_template_is_accepted() {
        let json = r#"{
            "layout": { "name": "DRAWER", "page_width": 210, "page_height": 297,
                        "cell_width": 50, "cell_height": 20, "margin_left": 5,
                        "margin_top": 5, "columns": 4, "rows": 14 },
            "labels": []
        }"#;
        let job: JobConfig = serde_json::from_str(json).unwrap();
        let template = job.layout.template().unwrap();
        assert_eq!(template.name, "DRAWER");
        assert_eq!(template.slots_per_page(), 56);
    }

    #[test]
    fn unknown_layout_fails_validation() {
        let json = r#"{"layout": "AVERY_9999", "labels": []}"#;
        let job: JobConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(
            job.validate(),
            Err(ConfigError::UnknownLayout { .. })
        ));
    }

    #[test]
    fn reject_invalid_log_level() {
        let json = r#"{"logging": {"level": "loud"}, "labels": []}"#;
        let job: JobConfig = serde_json::from_str(json).unwrap();
        assert!(job.validate().is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{"labels": [], "unknown_field": "value"}"#;
        assert!(serde_json::from_str::<JobConfig>(json).is_err());

        let json = r#"{"labels": [], "options": {"draw_outline": true}}"#;
        assert!(serde_json::from_str::<JobConfig>(json).is_err());
    }

    #[test]
    fn labels_are_required() {
        assert!(serde_json::from_str::<JobConfig>("{}").is_err());
    }

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
    }
}
