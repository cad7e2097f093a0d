//! In-memory stand-ins for the browser, used by unit tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use super::{ClickEvent, Clipboard, Page, Scheduler, TimerHandle, Tooltip, Trigger};
use crate::error::{BehaviorError, BehaviorResult};

#[derive(Default)]
pub struct FakePage {
    pub accept: Cell<bool>,
    pub prompts: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
    pub contents: HashMap<String, String>,
    pub cleared: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn answering(accept: bool) -> Self {
        let page = Self::default();
        page.accept.set(accept);
        page
    }

    pub fn with_content(mut self, selector: &str, text: &str) -> Self {
        self.contents.insert(selector.to_string(), text.to_string());
        self
    }
}

impl Page for FakePage {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.accept.get()
    }

    fn navigate(&self, url: &str) -> BehaviorResult<()> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn text_of(&self, selector: &str) -> Option<String> {
        self.contents.get(selector).cloned()
    }

    fn clear_value(&self, selector: &str) {
        self.cleared.borrow_mut().push(selector.to_string());
    }
}

#[derive(Default)]
pub struct FakeTrigger {
    attributes: HashMap<String, String>,
}

impl FakeTrigger {
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl Trigger for FakeTrigger {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn describe(&self) -> String {
        "<fake>".to_string()
    }
}

#[derive(Default)]
pub struct FakeEvent {
    pub prevented: Cell<bool>,
    pub stopped: Cell<bool>,
}

impl ClickEvent for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}

#[derive(Default)]
pub struct TooltipLog {
    pub label: String,
    pub shown: bool,
    pub calls: Vec<String>,
}

/// Clones share one log, like handles to the same DOM tooltip
#[derive(Clone, Default)]
pub struct FakeTooltip {
    pub log: Rc<RefCell<TooltipLog>>,
}

impl FakeTooltip {
    pub fn label(&self) -> String {
        self.log.borrow().label.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().calls.clone()
    }

    pub fn hide_count(&self) -> usize {
        self.log.borrow().calls.iter().filter(|c| *c == "hide").count()
    }
}

impl Tooltip for FakeTooltip {
    fn set_label(&self, text: &str) {
        let mut log = self.log.borrow_mut();
        log.label = text.to_string();
        log.calls.push(format!("label:{}", text));
    }

    fn show(&self) {
        let mut log = self.log.borrow_mut();
        log.shown = true;
        log.calls.push("show".to_string());
    }

    fn hide(&self) {
        let mut log = self.log.borrow_mut();
        log.shown = false;
        log.calls.push("hide".to_string());
    }

    fn is_shown(&self) -> bool {
        self.log.borrow().shown
    }
}

pub struct PendingTimer {
    pub delay_ms: u32,
    pub callback: Option<Box<dyn FnOnce()>>,
    pub cancelled: bool,
}

/// Timers only run when the test calls `fire_all`
#[derive(Clone, Default)]
pub struct FakeScheduler {
    pub timers: Rc<RefCell<Vec<PendingTimer>>>,
}

impl FakeScheduler {
    pub fn pending(&self) -> usize {
        self.timers.borrow().iter().filter(|t| t.callback.is_some()).count()
    }

    pub fn cancelled(&self) -> usize {
        self.timers.borrow().iter().filter(|t| t.cancelled).count()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.timers.borrow().iter().map(|t| t.delay_ms).collect()
    }

    pub fn fire_all(&self) {
        let callbacks: Vec<_> = self
            .timers
            .borrow_mut()
            .iter_mut()
            .filter_map(|t| t.callback.take())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

pub struct FakeTimer {
    index: usize,
    timers: Rc<RefCell<Vec<PendingTimer>>>,
}

impl Scheduler for FakeScheduler {
    type Handle = FakeTimer;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> FakeTimer {
        let mut timers = self.timers.borrow_mut();
        timers.push(PendingTimer {
            delay_ms,
            callback: Some(callback),
            cancelled: false,
        });
        FakeTimer {
            index: timers.len() - 1,
            timers: self.timers.clone(),
        }
    }
}

impl TimerHandle for FakeTimer {
    fn cancel(self) {
        if let Some(timer) = self.timers.borrow_mut().get_mut(self.index) {
            timer.callback = None;
            timer.cancelled = true;
        }
    }

    fn detach(self) {}
}

pub struct FakeClipboard {
    pub fail_with: Option<String>,
    pub written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    pub fn working() -> Self {
        Self { fail_with: None, written: RefCell::new(Vec::new()) }
    }

    pub fn denied() -> Self {
        Self {
            fail_with: Some("NotAllowedError".to_string()),
            written: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> BehaviorResult<()> {
        if let Some(reason) = &self.fail_with {
            return Err(BehaviorError::ClipboardWrite(reason.clone()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}
