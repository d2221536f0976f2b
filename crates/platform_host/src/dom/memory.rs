//! In-memory document tree implementing [`DocumentHandle`].

use std::{cell::RefCell, fmt, rc::Rc};

use super::{ClickHandler, DocumentHandle, ElementHandle, ElementQuery};

struct MemoryNode {
    tag: String,
    id: RefCell<Option<String>>,
    classes: RefCell<Vec<String>>,
    text: RefCell<String>,
    children: RefCell<Vec<MemoryElement>>,
    click_handlers: RefCell<Vec<Rc<dyn Fn()>>>,
}

#[derive(Clone)]
/// Shared handle to an in-memory element node.
///
/// Equality is node identity, not structural equality.
pub struct MemoryElement {
    node: Rc<MemoryNode>,
}

impl MemoryElement {
    /// Creates a detached element.
    pub fn new(tag: &str) -> Self {
        Self {
            node: Rc::new(MemoryNode {
                tag: tag.to_ascii_lowercase(),
                id: RefCell::new(None),
                classes: RefCell::new(Vec::new()),
                text: RefCell::new(String::new()),
                children: RefCell::new(Vec::new()),
                click_handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Builder form of [`ElementHandle::set_class`].
    pub fn with_class(self, class_name: &str) -> Self {
        self.set_class(class_name, true);
        self
    }

    /// Builder form of [`ElementHandle::set_id`].
    pub fn with_id(self, id: &str) -> Self {
        self.set_id(id);
        self
    }

    /// Lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.node.tag
    }

    /// Current class list, in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.node.classes.borrow().clone()
    }

    /// Direct children, in order.
    pub fn children(&self) -> Vec<MemoryElement> {
        self.node.children.borrow().clone()
    }

    /// Appends `child` as the last child and returns `self` for chaining.
    pub fn append(&self, child: &MemoryElement) -> &Self {
        self.node.children.borrow_mut().push(child.clone());
        self
    }

    /// Number of registered click callbacks.
    pub fn click_handler_count(&self) -> usize {
        self.node.click_handlers.borrow().len()
    }

    /// Dispatches a click to every registered callback.
    pub fn click(&self) {
        // Handlers may mutate this node, so the list is not borrowed while they run.
        let handlers = self.node.click_handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }

    fn visit(&self, out: &mut Vec<MemoryElement>, matches: &dyn Fn(&MemoryElement) -> bool) {
        if matches(self) {
            out.push(self.clone());
        }
        for child in self.children() {
            child.visit(out, matches);
        }
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("tag", &self.node.tag)
            .field("id", &self.node.id.borrow())
            .field("classes", &self.node.classes.borrow())
            .field("text", &self.node.text.borrow())
            .field("children", &self.node.children.borrow().len())
            .finish()
    }
}

impl ElementHandle for MemoryElement {
    fn id(&self) -> Option<String> {
        self.node.id.borrow().clone()
    }

    fn set_id(&self, id: &str) {
        *self.node.id.borrow_mut() = Some(id.to_string());
    }

    fn has_class(&self, class_name: &str) -> bool {
        self.node.classes.borrow().iter().any(|c| c == class_name)
    }

    fn set_class(&self, class_name: &str, enabled: bool) {
        let mut classes = self.node.classes.borrow_mut();
        let present = classes.iter().any(|c| c == class_name);
        if enabled && !present {
            classes.push(class_name.to_string());
        } else if !enabled && present {
            classes.retain(|c| c != class_name);
        }
    }

    fn text(&self) -> String {
        self.node.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.node.text.borrow_mut() = text.to_string();
    }

    fn prepend_child(&self, child: &Self) -> Result<(), String> {
        if child == self {
            return Err("cannot insert an element into itself".to_string());
        }
        self.node.children.borrow_mut().insert(0, child.clone());
        Ok(())
    }

    fn on_click(&self, handler: ClickHandler) {
        self.node.click_handlers.borrow_mut().push(Rc::from(handler));
    }
}

#[derive(Debug, Clone)]
/// In-memory document rooted at an optional `<body>`.
///
/// Queries walk the tree below (and including) the body in document order; detached elements
/// are invisible until inserted.
pub struct MemoryDocument {
    body: Option<MemoryElement>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document with an empty `<body>`.
    pub fn new() -> Self {
        Self {
            body: Some(MemoryElement::new("body")),
        }
    }

    /// Creates a document that has not parsed its `<body>` yet.
    pub fn without_body() -> Self {
        Self { body: None }
    }

    fn collect(&self, matches: &dyn Fn(&MemoryElement) -> bool) -> Vec<MemoryElement> {
        let mut out = Vec::new();
        if let Some(body) = &self.body {
            body.visit(&mut out, matches);
        }
        out
    }
}

impl DocumentHandle for MemoryDocument {
    type Element = MemoryElement;

    fn body(&self) -> Option<MemoryElement> {
        self.body.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.collect(&|el| el.id().as_deref() == Some(id))
            .into_iter()
            .next()
    }

    fn query_all(&self, query: &ElementQuery) -> Vec<MemoryElement> {
        match query {
            ElementQuery::Class(name) => self.collect(&|el| el.has_class(name)),
            ElementQuery::Tag(name) => self.collect(&|el| el.tag().eq_ignore_ascii_case(name)),
        }
    }

    fn create_element(&self, tag: &str) -> Option<MemoryElement> {
        Some(MemoryElement::new(tag))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn sample_document() -> MemoryDocument {
        let doc = MemoryDocument::new();
        let body = doc.body().expect("body");
        let header = MemoryElement::new("header").with_id("top");
        let card = MemoryElement::new("div").with_class("card");
        let nested = MemoryElement::new("pre").with_class("card");
        card.append(&nested);
        body.append(&header).append(&card);
        doc
    }

    #[test]
    fn queries_walk_in_document_order() {
        let doc = sample_document();
        let cards = doc.query_all(&ElementQuery::class("card"));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].tag(), "div");
        assert_eq!(cards[1].tag(), "pre");
        assert_eq!(doc.query_all(&ElementQuery::tag("PRE")).len(), 1);
        assert!(doc.query_all(&ElementQuery::tag("code")).is_empty());
    }

    #[test]
    fn detached_elements_are_not_found_until_inserted() {
        let doc = sample_document();
        let button = doc.create_element("button").expect("create");
        button.set_id("dark-button");
        assert_eq!(doc.element_by_id("dark-button"), None);

        doc.body().expect("body").prepend_child(&button).expect("prepend");
        assert_eq!(doc.element_by_id("dark-button"), Some(button.clone()));
        assert_eq!(doc.body().expect("body").children()[0], button);
    }

    #[test]
    fn set_class_is_idempotent_per_direction() {
        let el = MemoryElement::new("div");
        el.set_class("dark", true);
        el.set_class("dark", true);
        assert_eq!(el.classes(), vec!["dark".to_string()]);
        el.set_class("dark", false);
        el.set_class("dark", false);
        assert!(el.classes().is_empty());
    }

    #[test]
    fn click_runs_handlers_that_mutate_the_same_node() {
        let el = MemoryElement::new("button");
        let hits = Rc::new(Cell::new(0));
        let target = el.clone();
        let counter = hits.clone();
        el.on_click(Box::new(move || {
            counter.set(counter.get() + 1);
            target.set_text("clicked");
        }));

        el.click();
        el.click();
        assert_eq!(hits.get(), 2);
        assert_eq!(el.text(), "clicked");
        assert_eq!(el.click_handler_count(), 1);
    }

    #[test]
    fn document_without_body_is_empty() {
        let doc = MemoryDocument::without_body();
        assert_eq!(doc.body(), None);
        assert_eq!(doc.element_by_id("x"), None);
        assert!(doc.query_all(&ElementQuery::class("card")).is_empty());
    }
}
