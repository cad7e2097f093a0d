//! Clipboard helper for `.btn-clipboard` triggers
//!
//! What to copy is read from the trigger's attributes:
//! - `data-clipboard-text`: literal text, wins when present
//! - `data-clipboard-target`: selector of an input, textarea or any element
//! - `data-clipboard-action`: `copy` (default) or `cut`

use crate::error::{BehaviorError, BehaviorResult};
use crate::page::{Clipboard, Page, Trigger};

pub const TEXT_ATTRIBUTE: &str = "data-clipboard-text";
pub const TARGET_ATTRIBUTE: &str = "data-clipboard-target";
pub const ACTION_ATTRIBUTE: &str = "data-clipboard-action";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyAction {
    Copy,
    Cut,
}

impl CopyAction {
    pub fn parse(raw: Option<&str>) -> BehaviorResult<Self> {
        match raw.map(str::trim) {
            None | Some("") | Some("copy") => Ok(CopyAction::Copy),
            Some("cut") => Ok(CopyAction::Cut),
            Some(other) => Err(BehaviorError::InvalidAction { action: other.to_string() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CopyRequest {
    pub text: String,
    pub action: CopyAction,
    /// Selector the text was read from, if any
    pub target: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CopyOutcome {
    Success { text: String, action: CopyAction },
    Error { reason: String },
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Success { .. })
    }
}

/// Work out what a trigger wants copied
pub fn resolve_request<P: Page, T: Trigger>(page: &P, trigger: &T) -> BehaviorResult<CopyRequest> {
    let action = CopyAction::parse(trigger.attribute(ACTION_ATTRIBUTE).as_deref())?;

    if let Some(text) = trigger.attribute(TEXT_ATTRIBUTE) {
        return Ok(CopyRequest { text, action, target: None });
    }

    let selector = trigger.attribute(TARGET_ATTRIBUTE).ok_or(BehaviorError::NothingToCopy)?;
    let text = page
        .text_of(&selector)
        .ok_or_else(|| BehaviorError::TargetNotFound { selector: selector.clone() })?;

    Ok(CopyRequest { text, action, target: Some(selector) })
}

/// Copy whatever the trigger points at and report how it went
pub async fn copy_from_trigger<P, C, T>(page: &P, clipboard: &C, trigger: &T) -> CopyOutcome
where
    P: Page,
    C: Clipboard,
    T: Trigger,
{
    let request = match resolve_request(page, trigger) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Clipboard trigger {} is misconfigured: {}", trigger.describe(), e);
            return CopyOutcome::Error { reason: e.to_string() };
        }
    };

    if let Err(e) = clipboard.write_text(&request.text).await {
        log::error!("Failed to copy to clipboard: {}", e);
        return CopyOutcome::Error { reason: e.to_string() };
    }

    if request.action == CopyAction::Cut {
        if let Some(selector) = &request.target {
            page.clear_value(selector);
        }
    }

    log::info!("Copied {} characters to clipboard", request.text.chars().count());
    CopyOutcome::Success { text: request.text, action: request.action }
}
