//! Page Configuration
//!
//! Defaults can be overridden by a JSON object embedded in the page:
//! `<script id="ledger-config" type="application/json">{...}</script>`.

use serde::Deserialize;

use ledger_core::ExportConfig;

/// Element holding the JSON overrides
const CONFIG_ELEMENT_ID: &str = "ledger-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub export: ExportConfig,
    /// Notice auto-dismiss delay in milliseconds, 0 disables
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
            notice_timeout_ms: 4000,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());

        let Some(text) = text else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!("[CONFIG] Loaded page overrides: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
