//! Syntax highlighting for code blocks via the page's `hljs` global

/// Entry points in order of preference; the second is the pre-v11 API
const ENTRY_POINTS: [&str; 2] = ["highlightAll", "initHighlightingOnLoad"];

/// Pick the highlighter function to call given which ones exist
pub fn entry_point(has_function: impl Fn(&str) -> bool) -> Option<&'static str> {
    ENTRY_POINTS.into_iter().find(|name| has_function(*name))
}

/// Run the page highlighter once, returning whether one was found
#[cfg(target_arch = "wasm32")]
pub fn activate() -> bool {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return false;
    };
    let hljs = match js_sys::Reflect::get(&window, &JsValue::from_str("hljs")) {
        Ok(value) if value.is_object() => value,
        _ => {
            log::debug!("No syntax highlighter on page");
            return false;
        }
    };

    let lookup = |name: &str| {
        js_sys::Reflect::get(&hljs, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    };

    let Some(name) = entry_point(|name| lookup(name).is_some()) else {
        log::debug!("Syntax highlighter has no known entry point");
        return false;
    };

    match lookup(name).map(|function| function.call0(&hljs)) {
        Some(Ok(_)) => {
            log::info!("Syntax highlighting activated via hljs.{}", name);
            true
        }
        Some(Err(e)) => {
            log::warn!("Syntax highlighting failed: {:?}", e);
            false
        }
        None => false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn activate() -> bool {
    false
}
