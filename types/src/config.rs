use std::time::Duration;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::{app_link::DEFAULT_APP_URL, field::FieldSet};

/// Settings for the reset-link handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Scheme URL the companion app is registered for.
    pub app_url: Url,
    /// Name used in user-facing copy.
    pub app_name: String,
    pub field_set: FieldSet,
    pub auto_open_delay_ms: u64,
    pub reminder_delay_ms: u64,
    pub copy_reset_delay_ms: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            app_name: "AuraBean".into(),
            field_set: FieldSet::Extended,
            auto_open_delay_ms: 800,
            reminder_delay_ms: 2200,
            copy_reset_delay_ms: 1500,
        }
    }
}

impl HandlerConfig {
    /// Layer a JSON object of overrides on top of `self`.
    ///
    /// Keys that are absent, `null` or blank strings keep their current value;
    /// string values are trimmed. Unknown keys are ignored.
    pub fn with_overrides_json(&self, json: &str) -> Result<Self> {
        let overrides: Map<String, Value> = serde_json::from_str(json)
            .wrap_err("handler config overrides must be a JSON object")?;
        let mut merged = serde_json::to_value(self).wrap_err("failed to serialize handler config")?;

        if let Value::Object(fields) = &mut merged {
            for (key, value) in overrides {
                match value {
                    Value::Null => {}
                    Value::String(s) if s.trim().is_empty() => {}
                    Value::String(s) => {
                        fields.insert(key, Value::String(s.trim().to_string()));
                    }
                    other => {
                        fields.insert(key, other);
                    }
                }
            }
        }

        serde_json::from_value(merged).wrap_err("failed to parse handler config")
    }

    pub fn auto_open_delay(&self) -> Duration {
        Duration::from_millis(self.auto_open_delay_ms)
    }

    pub fn reminder_delay(&self) -> Duration {
        Duration::from_millis(self.reminder_delay_ms)
    }

    pub fn copy_reset_delay(&self) -> Duration {
        Duration::from_millis(self.copy_reset_delay_ms)
    }
}

fn default_app_url() -> Url {
    Url::parse(DEFAULT_APP_URL).expect("default app url is valid")
}
