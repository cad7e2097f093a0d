//! Tooltips on clipboard triggers and the copy feedback shown in them
//!
//! Per trigger the feedback cycles `idle -> shown(message) -> idle`; the way
//! back to idle is a one-shot hide timer.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use super::clipboard::CopyOutcome;
use crate::config::BehaviorConfig;
use crate::page::{Scheduler, TimerHandle, Tooltip};

pub const COPIED_MESSAGE: &str = "Copied!";
pub const FAILED_MESSAGE: &str = "Failed!";
pub const HIDE_DELAY_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    /// Clicking the trigger toggles the tooltip
    Click,
    /// Only copy feedback shows the tooltip
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipOptions {
    pub trigger: TooltipTrigger,
    pub placement: Placement,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            trigger: TooltipTrigger::Click,
            placement: Placement::Bottom,
        }
    }
}

/// Click handler for `trigger: click` tooltips
pub fn toggle<T: Tooltip>(tooltip: &T) {
    if tooltip.is_shown() {
        tooltip.hide();
    } else {
        tooltip.show();
    }
}

/// Copy feedback for a single trigger
pub struct TooltipFeedback<S: Scheduler> {
    copied_message: String,
    failed_message: String,
    hide_delay_ms: u32,
    cancel_stale_hides: bool,
    pending_hide: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> TooltipFeedback<S> {
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            copied_message: config.copied_message.clone(),
            failed_message: config.failed_message.clone(),
            hide_delay_ms: config.hide_delay_ms,
            cancel_stale_hides: config.cancel_stale_hides,
            pending_hide: RefCell::new(None),
        }
    }

    pub fn message_for(&self, outcome: &CopyOutcome) -> &str {
        if outcome.is_success() {
            &self.copied_message
        } else {
            &self.failed_message
        }
    }

    /// Relabel the tooltip, redisplay it, and schedule it to hide
    pub fn report<T>(&self, tooltip: &T, scheduler: &S, outcome: &CopyOutcome)
    where
        T: Tooltip + Clone + 'static,
    {
        tooltip.set_label(self.message_for(outcome));
        // Hide then show so a visible tooltip picks up the new label
        tooltip.hide();
        tooltip.show();

        let hide_target = tooltip.clone();
        let handle = scheduler.schedule(self.hide_delay_ms, Box::new(move || hide_target.hide()));

        if self.cancel_stale_hides {
            if let Some(stale) = self.pending_hide.borrow_mut().replace(handle) {
                log::debug!("Cancelling stale tooltip hide");
                stale.cancel();
            }
        } else {
            handle.detach();
        }
    }
}
