//! Handler configuration: built-in defaults, then build-time environment
//! variables, then `window.AURABEAN_RESET_CONFIG` if the page defines it.
//! Values are public; never put secrets here.

use types::HandlerConfig;

pub fn load() -> HandlerConfig {
    let mut config = apply_overrides(HandlerConfig::default(), &build_time_overrides());

    if let Some(runtime) = runtime_config() {
        config = apply_overrides(config, &runtime);
    }

    tracing::debug!(
        app_url = %config.app_url,
        field_set = ?config.field_set,
        "loaded handler config"
    );
    config
}

fn build_time_overrides() -> String {
    serde_json::json!({
        "app_url": option_env!("AURABEAN_APP_URL"),
        "field_set": option_env!("AURABEAN_FIELD_SET"),
    })
    .to_string()
}

/// A rejected override set leaves `config` as it was.
fn apply_overrides(config: HandlerConfig, overrides: &str) -> HandlerConfig {
    match config.with_overrides_json(overrides) {
        Ok(merged) => merged,
        Err(e) => {
            tracing::warn!(error = ?e, "ignoring handler config overrides");
            config
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<String> {
    use js_sys::{JSON, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AURABEAN_RESET_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    JSON::stringify(&config).ok().map(String::from)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<String> {
    None
}
