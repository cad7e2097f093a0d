use crate::page::{ClickEvent, Page};

pub const REMOVE_PROMPT: &str = "Are you sure you want to permanently remove this item?";
pub const REVOKE_PROMPT: &str = "Are you sure you want to permanently revoke this item?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    /// Default action (link, form submission) proceeds untouched
    Accepted,
    /// Default action and propagation were suppressed
    Declined,
}

/// Ask the user to confirm a destructive action before letting the click through
///
/// Only propagation to ancestors is stopped on decline, so a second
/// confirmation bound to the same element still runs.
pub fn confirm_action<P: Page, E: ClickEvent>(page: &P, event: &E, prompt: &str) -> Confirmation {
    if page.confirm(prompt) {
        return Confirmation::Accepted;
    }

    event.stop_propagation();
    event.prevent_default();
    log::debug!("Destructive action declined: {}", prompt);
    Confirmation::Declined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::{FakeEvent, FakePage};

    #[test]
    fn test_decline_cancels_default_and_propagation() {
        let page = FakePage::answering(false);
        let event = FakeEvent::default();

        let result = confirm_action(&page, &event, REMOVE_PROMPT);

        assert_eq!(result, Confirmation::Declined);
        assert!(event.prevented.get());
        assert!(event.stopped.get());
        assert!(page.navigations.borrow().is_empty());
    }

    #[test]
    fn test_accept_leaves_event_alone() {
        let page = FakePage::answering(true);
        let event = FakeEvent::default();

        let result = confirm_action(&page, &event, REVOKE_PROMPT);

        assert_eq!(result, Confirmation::Accepted);
        assert!(!event.prevented.get());
        assert!(!event.stopped.get());
    }

    #[test]
    fn test_prompt_text_is_shown_verbatim() {
        let page = FakePage::answering(true);
        let event = FakeEvent::default();

        confirm_action(&page, &event, REMOVE_PROMPT);
        confirm_action(&page, &event, REVOKE_PROMPT);

        assert_eq!(
            *page.prompts.borrow(),
            vec![
                "Are you sure you want to permanently remove this item?".to_string(),
                "Are you sure you want to permanently revoke this item?".to_string(),
            ]
        );
    }
}
