//! `web_sys::Document`-backed implementation of the host document contracts.

use platform_host::{ClickHandler, DocumentHandle, ElementHandle, ElementQuery};
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser element handle.
pub struct WebElement(web_sys::Element);

impl WebElement {
    /// Wraps a raw browser element.
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    /// Returns the underlying browser element.
    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl ElementHandle for WebElement {
    fn id(&self) -> Option<String> {
        let id = self.0.id();
        (!id.is_empty()).then_some(id)
    }

    fn set_id(&self, id: &str) {
        self.0.set_id(id);
    }

    fn has_class(&self, class_name: &str) -> bool {
        self.0.class_list().contains(class_name)
    }

    fn set_class(&self, class_name: &str, enabled: bool) {
        let _ = self.0.class_list().toggle_with_force(class_name, enabled);
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn prepend_child(&self, child: &Self) -> Result<(), String> {
        self.0
            .prepend_with_node_1(&child.0)
            .map_err(|err| format!("element prepend failed: {err:?}"))
    }

    fn on_click(&self, handler: ClickHandler) {
        let callback = Closure::<dyn Fn()>::wrap(handler);
        let _ = self
            .0
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        // Never removed; leaked with the element.
        callback.forget();
    }
}

#[derive(Debug, Clone, Default)]
/// Browser document handle.
///
/// On non-wasm targets there is no document and every lookup comes back empty.
pub struct WebDocument {
    document: Option<web_sys::Document>,
}

impl WebDocument {
    /// Returns the current window's document, if any.
    pub fn current() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {
                document: web_sys::window().and_then(|window| window.document()),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { document: None }
        }
    }

    /// Reports whether the document is still parsing (`readyState == "loading"`).
    pub fn is_loading(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|document| document.ready_state() == "loading")
    }

    /// Runs `callback` once the DOM is parsed: immediately when it already is, otherwise on
    /// `DOMContentLoaded`.
    ///
    /// # Errors
    ///
    /// Returns an error when the listener cannot be registered.
    pub fn when_ready(&self, callback: impl FnOnce() + 'static) -> Result<(), String> {
        let Some(document) = self.document.as_ref().filter(|_| self.is_loading()) else {
            callback();
            return Ok(());
        };
        let listener = Closure::once_into_js(callback);
        document
            .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
            .map_err(|err| format!("DOMContentLoaded listener registration failed: {err:?}"))
    }

    fn collect(collection: &web_sys::HtmlCollection) -> Vec<WebElement> {
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .map(WebElement)
            .collect()
    }
}

impl DocumentHandle for WebDocument {
    type Element = WebElement;

    fn body(&self) -> Option<WebElement> {
        let body = self.document.as_ref()?.body()?;
        Some(WebElement(body.into()))
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document
            .as_ref()?
            .get_element_by_id(id)
            .map(WebElement)
    }

    fn query_all(&self, query: &ElementQuery) -> Vec<WebElement> {
        let Some(document) = self.document.as_ref() else {
            return Vec::new();
        };
        let collection = match query {
            ElementQuery::Class(name) => document.get_elements_by_class_name(name),
            ElementQuery::Tag(name) => document.get_elements_by_tag_name(name),
        };
        // HtmlCollection is live; snapshot it so later insertions do not leak in.
        Self::collect(&collection)
    }

    fn create_element(&self, tag: &str) -> Option<WebElement> {
        self.document
            .as_ref()?
            .create_element(tag)
            .ok()
            .map(WebElement)
    }
}
