//! Browser implementation of the page seams and the behavior binder

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

use super::{ClickEvent, Clipboard, Page, Scheduler, TimerHandle, Tooltip, Trigger};
use crate::behaviors::tooltip::{self, Placement, TooltipFeedback, TooltipTrigger};
use crate::behaviors::{bindings, clickable_row, clipboard, confirm, highlight, Behavior};
use crate::config::{BehaviorConfig, CONFIG_ELEMENT_ID};
use crate::error::{BehaviorError, BehaviorResult};

pub fn window() -> BehaviorResult<Window> {
    web_sys::window().ok_or(BehaviorError::WindowUnavailable)
}

// =============================================================================
// Document Ready
// =============================================================================

/// Run `callback` once the document has been parsed
pub fn on_document_ready<F>(document: &Document, callback: F) -> BehaviorResult<()>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let mut callback = Some(callback);
    let handler = Closure::wrap(Box::new(move |_: Event| {
        if let Some(callback) = callback.take() {
            callback();
        }
    }) as Box<dyn FnMut(Event)>);

    document.add_event_listener_with_callback("DOMContentLoaded", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Raw text of the inline JSON config block, if the page has one
pub fn config_source(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}

// =============================================================================
// Page Root
// =============================================================================

/// Node that selector queries are scoped to
pub enum PageRoot {
    Document(Document),
    Element(Element),
}

/// Attribute marking a container that scopes behaviors instead of the whole document
pub const ROOT_ATTRIBUTE: &str = "data-page-behaviors-root";

impl PageRoot {
    pub fn discover(document: &Document) -> Self {
        match document.query_selector(&format!("[{}]", ROOT_ATTRIBUTE)) {
            Ok(Some(element)) => PageRoot::Element(element),
            _ => PageRoot::Document(document.clone()),
        }
    }

    pub fn query_all(&self, selector: &str) -> BehaviorResult<Vec<Element>> {
        let nodes = match self {
            PageRoot::Document(document) => document.query_selector_all(selector)?,
            PageRoot::Element(element) => element.query_selector_all(selector)?,
        };

        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

// =============================================================================
// Page, Trigger, Event
// =============================================================================

pub struct WebPage {
    window: Window,
    document: Document,
}

impl Page for WebPage {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|e| {
            log::warn!("Confirmation dialog unavailable, treating as declined: {:?}", e);
            false
        })
    }

    fn navigate(&self, url: &str) -> BehaviorResult<()> {
        self.window.location().set_href(url)?;
        Ok(())
    }

    fn text_of(&self, selector: &str) -> Option<String> {
        let element = self.document.query_selector(selector).ok().flatten()?;

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Some(textarea.value());
        }
        Some(element.text_content().unwrap_or_default())
    }

    fn clear_value(&self, selector: &str) {
        let Some(element) = self.document.query_selector(selector).ok().flatten() else {
            return;
        };

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.set_value("");
        }
    }
}

#[derive(Clone)]
pub struct WebTrigger(Element);

impl Trigger for WebTrigger {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn describe(&self) -> String {
        format!("<{} class=\"{}\">", self.0.tag_name().to_lowercase(), self.0.class_name())
    }
}

pub struct WebClickEvent(Event);

impl ClickEvent for WebClickEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

// =============================================================================
// Tooltip
// =============================================================================

struct TooltipInner {
    document: Document,
    anchor: Element,
    placement: Placement,
    label: RefCell<String>,
    bubble: RefCell<Option<HtmlElement>>,
}

/// Bootstrap-styled tooltip rendered next to its anchor element
#[derive(Clone)]
pub struct WebTooltip {
    inner: Rc<TooltipInner>,
}

impl WebTooltip {
    pub fn attach(document: &Document, anchor: &Element, placement: Placement) -> Self {
        // Move the native title aside so the browser does not draw its own tooltip
        let label = match anchor.get_attribute("title").filter(|t| !t.is_empty()) {
            Some(title) => {
                let _ = anchor.remove_attribute("title");
                let _ = anchor.set_attribute("data-original-title", &title);
                title
            }
            None => anchor.get_attribute("data-original-title").unwrap_or_default(),
        };

        Self {
            inner: Rc::new(TooltipInner {
                document: document.clone(),
                anchor: anchor.clone(),
                placement,
                label: RefCell::new(label),
                bubble: RefCell::new(None),
            }),
        }
    }

    fn render(&self) -> BehaviorResult<HtmlElement> {
        let document = &self.inner.document;
        let bubble = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BehaviorError::Dom("tooltip is not an HtmlElement".to_string()))?;
        bubble.set_class_name(&format!("tooltip bs-tooltip-{} show", self.inner.placement.as_str()));
        bubble.set_attribute("role", "tooltip")?;

        let body = document.create_element("div")?;
        body.set_class_name("tooltip-inner");
        body.set_text_content(Some(self.inner.label.borrow().as_str()));
        bubble.append_child(&body)?;

        document
            .body()
            .ok_or(BehaviorError::DocumentUnavailable)?
            .append_child(&bubble)?;
        self.position(&bubble)?;
        Ok(bubble)
    }

    fn position(&self, bubble: &HtmlElement) -> BehaviorResult<()> {
        let window = window()?;
        let rect = self.inner.anchor.get_bounding_client_rect();
        let width = bubble.offset_width() as f64;
        let height = bubble.offset_height() as f64;

        let (left, top) = match self.inner.placement {
            Placement::Bottom => (rect.left() + (rect.width() - width) / 2.0, rect.bottom()),
            Placement::Top => (rect.left() + (rect.width() - width) / 2.0, rect.top() - height),
            Placement::Left => (rect.left() - width, rect.top() + (rect.height() - height) / 2.0),
            Placement::Right => (rect.right(), rect.top() + (rect.height() - height) / 2.0),
        };

        let style = bubble.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &format!("{}px", left + window.scroll_x()?))?;
        style.set_property("top", &format!("{}px", top + window.scroll_y()?))?;
        Ok(())
    }
}

impl Tooltip for WebTooltip {
    fn set_label(&self, text: &str) {
        *self.inner.label.borrow_mut() = text.to_string();
        let _ = self.inner.anchor.set_attribute("data-original-title", text);

        if let Some(bubble) = self.inner.bubble.borrow().as_ref() {
            if let Ok(Some(body)) = bubble.query_selector(".tooltip-inner") {
                body.set_text_content(Some(text));
            }
        }
    }

    fn show(&self) {
        if self.is_shown() {
            return;
        }
        match self.render() {
            Ok(bubble) => *self.inner.bubble.borrow_mut() = Some(bubble),
            Err(e) => log::warn!("Failed to show tooltip: {}", e),
        }
    }

    fn hide(&self) {
        if let Some(bubble) = self.inner.bubble.borrow_mut().take() {
            bubble.remove();
        }
    }

    fn is_shown(&self) -> bool {
        self.inner.bubble.borrow().is_some()
    }
}

/// One tooltip per anchor, shared by the toggle and copy handlers
#[derive(Default)]
struct TooltipRegistry {
    entries: Vec<(Element, WebTooltip)>,
}

impl TooltipRegistry {
    fn get_or_attach(&mut self, document: &Document, anchor: &Element, placement: Placement) -> WebTooltip {
        if let Some((_, tooltip)) = self.entries.iter().find(|(element, _)| element == anchor) {
            return tooltip.clone();
        }

        let tooltip = WebTooltip::attach(document, anchor, placement);
        self.entries.push((anchor.clone(), tooltip.clone()));
        tooltip
    }
}

// =============================================================================
// Timers and Clipboard
// =============================================================================

#[derive(Clone, Copy, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

impl TimerHandle for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }

    fn detach(self) {
        let _ = self.forget();
    }
}

#[derive(Clone, Copy, Default)]
pub struct WebClipboard;

#[async_trait(?Send)]
impl Clipboard for WebClipboard {
    async fn write_text(&self, text: &str) -> BehaviorResult<()> {
        let clipboard = window()?.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| BehaviorError::ClipboardWrite(e.as_string().unwrap_or_else(|| format!("{:?}", e))))
    }
}

// =============================================================================
// Binder
// =============================================================================

fn listener<F>(handler: F) -> Closure<dyn FnMut(Event)>
where
    F: FnMut(Event) + 'static,
{
    Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>)
}

/// Bind every page behavior to the matching elements under `root`
///
/// Returns the number of listeners registered. Call once per page; calling
/// again on the same markup registers duplicate listeners.
pub fn init_page_behaviors(root: &PageRoot, config: &BehaviorConfig) -> BehaviorResult<usize> {
    let window = window()?;
    let document = window.document().ok_or(BehaviorError::DocumentUnavailable)?;
    let page = Rc::new(WebPage { window, document: document.clone() });

    if config.highlight_code {
        highlight::activate();
    }

    let mut tooltips = TooltipRegistry::default();
    let mut bound = 0;

    for binding in bindings(config) {
        let elements = root.query_all(binding.selector)?;
        log::debug!(
            "Binding {} {} handler(s) for {}",
            elements.len(),
            binding.event.as_str(),
            binding.selector
        );

        for element in elements {
            let handler = match &binding.behavior {
                Behavior::Confirm { prompt } => {
                    let page = page.clone();
                    let prompt = prompt.clone();
                    listener(move |event| {
                        confirm::confirm_action(&*page, &WebClickEvent(event), &prompt);
                    })
                }
                Behavior::NavigateRow { attribute } => {
                    let page = page.clone();
                    let attribute = attribute.clone();
                    let row = WebTrigger(element.clone());
                    listener(move |_| {
                        if let Err(e) = clickable_row::navigate_row(&*page, &row, &attribute) {
                            log::warn!("Clickable row {} not followed: {}", row.describe(), e);
                        }
                    })
                }
                Behavior::Tooltip(options) => {
                    let tooltip = tooltips.get_or_attach(&document, &element, options.placement);
                    if options.trigger == TooltipTrigger::Manual {
                        continue;
                    }
                    listener(move |_| tooltip::toggle(&tooltip))
                }
                Behavior::Copy => {
                    let tooltip = tooltips.get_or_attach(&document, &element, config.tooltip_placement);
                    let feedback = Rc::new(TooltipFeedback::<WebScheduler>::new(config));
                    let trigger = WebTrigger(element.clone());
                    let page = page.clone();
                    listener(move |_| {
                        let page = page.clone();
                        let trigger = trigger.clone();
                        let tooltip = tooltip.clone();
                        let feedback = feedback.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            let outcome = clipboard::copy_from_trigger(&*page, &WebClipboard, &trigger).await;
                            feedback.report(&tooltip, &WebScheduler, &outcome);
                        });
                    })
                }
            };

            element.add_event_listener_with_callback(binding.event.as_str(), handler.as_ref().unchecked_ref())?;
            // Listeners live as long as the page
            handler.forget();
            bound += 1;
        }
    }

    Ok(bound)
}
