//! Theme preference controller: the light/dark state machine bound to one page.
//!
//! The controller reads the persisted [`Preference`] once on [`ThemeController::initialize`],
//! makes sure a toggle control exists, and mirrors the preference onto the body and every themed
//! surface present at that moment. Each click on the control runs [`ThemeController::toggle`].
//! Surfaces inserted after `initialize` are not themed; there is no re-scan.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use leptos::logging;
use platform_host::{DocumentHandle, ElementHandle, PreferenceStore};

use crate::{config::ThemeConfig, preference::Preference};

const CONTROL_TAG: &str = "button";

/// Light/dark controller over an injected preference store and document.
pub struct ThemeController<S, D: DocumentHandle> {
    config: ThemeConfig,
    store: S,
    document: D,
    current: Cell<Preference>,
    control: RefCell<Option<D::Element>>,
    surfaces: RefCell<Vec<D::Element>>,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore + 'static,
    D: DocumentHandle + 'static,
{
    /// Creates an uninitialized controller. Nothing is read or mutated until
    /// [`ThemeController::initialize`].
    pub fn new(config: ThemeConfig, store: S, document: D) -> Rc<Self> {
        Rc::new(Self {
            config,
            store,
            document,
            current: Cell::new(Preference::default()),
            control: RefCell::new(None),
            surfaces: RefCell::new(Vec::new()),
        })
    }

    /// Loads the persisted preference, installs the toggle control and renders the page.
    ///
    /// Calling this again re-reads the store and re-captures surfaces without binding a second
    /// click handler to the same control.
    pub fn initialize(self: &Rc<Self>) {
        let preference = self.load_preference();
        self.current.set(preference);

        let control = self.ensure_control();
        if let Some(control) = &control {
            let already_bound = self.control.borrow().as_ref() == Some(control);
            if !already_bound {
                self.bind_click(control);
            }
        }
        *self.control.borrow_mut() = control;

        self.capture_surfaces();
        self.render(preference);
    }

    /// Flips the preference, persists it and re-renders the captured surfaces.
    pub fn toggle(&self) {
        let next = self.current.get().toggled();
        if let Err(err) = self.store.set(&self.config.storage_key, next.stored_value()) {
            logging::warn!("persist theme preference failed: {err}");
        }
        self.current.set(next);
        self.render(next);
    }

    /// The active preference.
    pub fn current(&self) -> Preference {
        self.current.get()
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The toggle control, once [`ThemeController::initialize`] has found or created it.
    pub fn control(&self) -> Option<D::Element> {
        self.control.borrow().clone()
    }

    /// Surfaces captured by the last [`ThemeController::initialize`], body first.
    pub fn surfaces(&self) -> Vec<D::Element> {
        self.surfaces.borrow().clone()
    }

    fn load_preference(&self) -> Preference {
        let Some(raw) = self.store.get(&self.config.storage_key) else {
            return Preference::default();
        };
        Preference::from_stored(&raw).unwrap_or_else(|| {
            logging::warn!(
                "ignoring unrecognized theme preference `{raw}` under `{}`",
                self.config.storage_key
            );
            Preference::default()
        })
    }

    fn ensure_control(&self) -> Option<D::Element> {
        if let Some(existing) = self.document.element_by_id(&self.config.control_id) {
            return Some(existing);
        }

        let container = self
            .config
            .header_container
            .as_ref()
            .and_then(|query| self.document.query_all(query).into_iter().next())
            .or_else(|| self.document.body());
        let Some(container) = container else {
            logging::warn!(
                "no container for theme toggle `{}`; skipping control",
                self.config.control_id
            );
            return None;
        };

        let control = self.document.create_element(CONTROL_TAG)?;
        control.set_id(&self.config.control_id);
        if let Err(err) = container.prepend_child(&control) {
            logging::warn!("insert theme toggle failed: {err}");
            return None;
        }
        Some(control)
    }

    fn bind_click(self: &Rc<Self>, control: &D::Element) {
        let weak = Rc::downgrade(self);
        control.on_click(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.toggle();
            }
        }));
    }

    fn capture_surfaces(&self) {
        let mut surfaces: Vec<D::Element> = self.document.body().into_iter().collect();
        for query in &self.config.themed_selectors {
            for element in self.document.query_all(query) {
                if !surfaces.contains(&element) {
                    surfaces.push(element);
                }
            }
        }
        *self.surfaces.borrow_mut() = surfaces;
    }

    fn render(&self, preference: Preference) {
        let dark = preference.is_dark();
        for surface in self.surfaces.borrow().iter() {
            surface.set_class(&self.config.theme_class_name, dark);
        }
        if let Some(control) = self.control.borrow().as_ref() {
            control.set_text(self.config.labels.offered_from(preference));
        }
    }
}
