//! Host document contracts consumed by DOM-mutating runtime components.
//!
//! Lookups return [`Option`] or empty collections rather than errors: a missing element is a
//! normal condition for pages that do not opt into every feature.

use super::ElementQuery;

/// Click callback registered through [`ElementHandle::on_click`].
pub type ClickHandler = Box<dyn Fn()>;

/// Handle to a single element owned by the host document.
///
/// Handles are cheap to clone and refer to the same underlying node; equality is node identity.
pub trait ElementHandle: Clone + PartialEq {
    /// Returns the element id attribute, if set.
    fn id(&self) -> Option<String>;

    /// Sets the element id attribute.
    fn set_id(&self, id: &str);

    /// Reports whether the class list contains `class_name`.
    fn has_class(&self, class_name: &str) -> bool;

    /// Adds (`enabled = true`) or removes `class_name` from the class list.
    fn set_class(&self, class_name: &str, enabled: bool);

    /// Returns the element's text content.
    fn text(&self) -> String;

    /// Replaces the element's text content.
    fn set_text(&self, text: &str);

    /// Inserts `child` as the first child of this element.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the insertion.
    fn prepend_child(&self, child: &Self) -> Result<(), String>;

    /// Registers a click callback for the lifetime of the element.
    fn on_click(&self, handler: ClickHandler);
}

/// Handle to the host document.
pub trait DocumentHandle {
    /// Element handle type produced by this document.
    type Element: ElementHandle;

    /// Returns the `<body>` element once the document has one.
    fn body(&self) -> Option<Self::Element>;

    /// Finds the first element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Returns every element currently matching `query`, in document order.
    fn query_all(&self, query: &ElementQuery) -> Vec<Self::Element>;

    /// Creates a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Option<Self::Element>;
}
