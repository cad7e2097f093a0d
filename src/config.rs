//! Runtime configuration for page behaviors
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="page-behaviors-config">`.
//! Every field is optional; anything omitted keeps its default.

use serde::{Deserialize, Serialize};

use crate::behaviors::clickable_row::DEFAULT_TARGET_ATTRIBUTE;
use crate::behaviors::confirm::{REMOVE_PROMPT, REVOKE_PROMPT};
use crate::behaviors::tooltip::{Placement, TooltipOptions, TooltipTrigger, COPIED_MESSAGE, FAILED_MESSAGE, HIDE_DELAY_MS};
use crate::error::{BehaviorError, BehaviorResult};

/// Element id of the inline JSON config block
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    pub remove_prompt: String,
    pub revoke_prompt: String,
    /// Attribute holding the navigation target of a clickable row
    pub row_target_attribute: String,
    pub copied_message: String,
    pub failed_message: String,
    pub hide_delay_ms: u32,
    /// Cancel the pending hide timer when a newer copy outcome arrives
    pub cancel_stale_hides: bool,
    pub highlight_code: bool,
    pub tooltip_placement: Placement,
    pub tooltip_trigger: TooltipTrigger,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            remove_prompt: REMOVE_PROMPT.to_string(),
            revoke_prompt: REVOKE_PROMPT.to_string(),
            row_target_attribute: DEFAULT_TARGET_ATTRIBUTE.to_string(),
            copied_message: COPIED_MESSAGE.to_string(),
            failed_message: FAILED_MESSAGE.to_string(),
            hide_delay_ms: HIDE_DELAY_MS,
            cancel_stale_hides: true,
            highlight_code: true,
            tooltip_placement: Placement::Bottom,
            tooltip_trigger: TooltipTrigger::Click,
        }
    }
}

impl BehaviorConfig {
    /// Parse and validate a JSON config block
    pub fn from_json(raw: &str) -> BehaviorResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from an optional JSON block, falling back to defaults
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => {
                log::info!("Loaded page behavior config");
                config
            }
            Err(e) => {
                log::warn!("Ignoring page behavior config: {}", e);
                Self::default()
            }
        }
    }

    pub fn tooltip_options(&self) -> TooltipOptions {
        TooltipOptions {
            trigger: self.tooltip_trigger,
            placement: self.tooltip_placement,
        }
    }

    fn validate(&self) -> BehaviorResult<()> {
        let required = [
            ("removePrompt", &self.remove_prompt),
            ("revokePrompt", &self.revoke_prompt),
            ("rowTargetAttribute", &self.row_target_attribute),
            ("copiedMessage", &self.copied_message),
            ("failedMessage", &self.failed_message),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BehaviorError::Config(format!("{} must not be empty", field)));
        }

        if self.hide_delay_ms == 0 {
            return Err(BehaviorError::Config("hideDelayMs must be positive".to_string()));
        }

        Ok(())
    }
}
