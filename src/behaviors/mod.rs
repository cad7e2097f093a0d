// Page behaviors bound by marker class
// The binding table is plain data; `page::web` turns it into DOM listeners

pub mod clickable_row;
pub mod clipboard;
pub mod confirm;
pub mod highlight;
pub mod tooltip;

use crate::config::BehaviorConfig;
use tooltip::TooltipOptions;

pub const REMOVE_SELECTOR: &str = ".action-remove";
pub const REVOKE_SELECTOR: &str = ".action-revoke";
pub const CLICKABLE_ROW_SELECTOR: &str = ".clickable-row";
pub const CLIPBOARD_SELECTOR: &str = ".btn-clipboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
    /// Ask before letting a destructive click through
    Confirm { prompt: String },
    /// Follow the URL stored in `attribute`
    NavigateRow { attribute: String },
    Tooltip(TooltipOptions),
    /// Copy to clipboard and report the outcome in the trigger's tooltip
    Copy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub selector: &'static str,
    pub event: EventKind,
    pub behavior: Behavior,
}

/// Every binding the console page gets, in registration order
///
/// Handlers on the same element fire in this order, so a clipboard
/// trigger's tooltip toggles before the copy outcome relabels it.
pub fn bindings(config: &BehaviorConfig) -> Vec<Binding> {
    vec![
        Binding {
            selector: REMOVE_SELECTOR,
            event: EventKind::Click,
            behavior: Behavior::Confirm { prompt: config.remove_prompt.clone() },
        },
        Binding {
            selector: REVOKE_SELECTOR,
            event: EventKind::Click,
            behavior: Behavior::Confirm { prompt: config.revoke_prompt.clone() },
        },
        Binding {
            selector: CLICKABLE_ROW_SELECTOR,
            event: EventKind::Click,
            behavior: Behavior::NavigateRow { attribute: config.row_target_attribute.clone() },
        },
        Binding {
            selector: CLIPBOARD_SELECTOR,
            event: EventKind::Click,
            behavior: Behavior::Tooltip(config.tooltip_options()),
        },
        Binding {
            selector: CLIPBOARD_SELECTOR,
            event: EventKind::Click,
            behavior: Behavior::Copy,
        },
    ]
}
