// Seams between the behavior handlers and the browser
// Handlers are generic over these traits; `web` implements them on wasm32

use async_trait::async_trait;

use crate::error::BehaviorResult;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod fake;

/// The element a listener is bound to
pub trait Trigger {
    fn attribute(&self, name: &str) -> Option<String>;

    /// Short description used in log lines
    fn describe(&self) -> String;
}

/// The click event delivered to a handler
pub trait ClickEvent {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

/// Page-level services: dialogs, navigation and lookups outside the trigger
pub trait Page {
    /// Show a blocking confirmation dialog; `true` when the user accepts
    fn confirm(&self, message: &str) -> bool;

    fn navigate(&self, url: &str) -> BehaviorResult<()>;

    /// Value of an input/textarea, or text content of any other element
    fn text_of(&self, selector: &str) -> Option<String>;

    /// Clear the value of an input/textarea; other elements are left alone
    fn clear_value(&self, selector: &str);
}

pub trait Tooltip {
    fn set_label(&self, text: &str);
    fn show(&self);
    /// Hiding an already hidden tooltip is a no-op
    fn hide(&self);
    fn is_shown(&self) -> bool;
}

/// One-shot timers
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub trait TimerHandle {
    /// Drop the timer without running its callback
    fn cancel(self);
    /// Let the timer run to completion without holding on to it
    fn detach(self);
}

#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> BehaviorResult<()>;
}
