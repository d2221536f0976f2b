//! Page boot: config discovery and controller lifetime.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use platform_host::{DocumentHandle, ElementHandle, PreferenceStore};
use theme_runtime::{ThemeConfig, ThemeController, CONFIG_ELEMENT_ID};

/// Reads the page's inline JSON config block, falling back to [`ThemeConfig::default`] when it is
/// absent or invalid.
pub fn load_config<D: DocumentHandle>(document: &D) -> ThemeConfig {
    let Some(element) = document.element_by_id(CONFIG_ELEMENT_ID) else {
        return ThemeConfig::default();
    };
    match ThemeConfig::from_json(&element.text()) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("`#{CONFIG_ELEMENT_ID}` ignored, using defaults: {err}");
            ThemeConfig::default()
        }
    }
}

/// Builds and initializes a controller for an already-parsed document.
pub fn boot_with<S, D>(store: S, document: D) -> Rc<ThemeController<S, D>>
where
    S: PreferenceStore + 'static,
    D: DocumentHandle + 'static,
{
    let config = load_config(&document);
    let controller = ThemeController::new(config, store, document);
    controller.initialize();
    logging::log!(
        "theme toggle ready: {} (`#{}`)",
        controller.current(),
        controller.config().control_id
    );
    controller
}

type WebController =
    ThemeController<platform_host_web::WebPreferenceStore, platform_host_web::WebDocument>;

thread_local! {
    // Click handlers only hold weak references; this keeps the page's controller alive.
    static ACTIVE_CONTROLLER: RefCell<Option<Rc<WebController>>> = const { RefCell::new(None) };
}

/// Boots the controller against the browser once the DOM is parsed.
pub fn boot_browser() {
    let document = platform_host_web::WebDocument::current();
    let ready_document = document.clone();
    let scheduled = document.when_ready(move || {
        let controller = boot_with(platform_host_web::WebPreferenceStore, ready_document);
        ACTIVE_CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    });
    if let Err(err) = scheduled {
        logging::warn!("theme toggle boot failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryDocument, MemoryElement, MemoryPreferenceStore};
    use theme_runtime::{Preference, DEFAULT_STORAGE_KEY};

    use super::*;

    fn document_with_config(raw: &str) -> MemoryDocument {
        let document = MemoryDocument::new();
        let script = MemoryElement::new("script").with_id(CONFIG_ELEMENT_ID);
        script.set_text(raw);
        document.body().expect("body").append(&script);
        document
    }

    #[test]
    fn missing_config_block_uses_defaults() {
        assert_eq!(load_config(&MemoryDocument::new()), ThemeConfig::default());
    }

    #[test]
    fn inline_config_block_is_applied() {
        let document = document_with_config(r#"{"themed_selectors": [".card", "code", "pre"]}"#);
        assert_eq!(load_config(&document), ThemeConfig::with_code_blocks());
    }

    #[test]
    fn invalid_config_block_falls_back_to_defaults() {
        let document = document_with_config(r#"{"theme_class_name": ""}"#);
        assert_eq!(load_config(&document), ThemeConfig::default());
    }

    #[test]
    fn boot_with_restores_persisted_preference() {
        let document = MemoryDocument::new();
        let body = document.body().expect("body");
        let store = MemoryPreferenceStore::with_entry(DEFAULT_STORAGE_KEY, "y");

        let controller = boot_with(store, document);
        assert_eq!(controller.current(), Preference::Dark);
        assert!(body.has_class("dark"));
        assert_eq!(controller.control().expect("control").text(), "light");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_boot_is_inert_off_wasm() {
        boot_browser();
        let controller = ACTIVE_CONTROLLER.with(|slot| slot.borrow().clone());
        let controller = controller.expect("controller kept alive");
        assert_eq!(controller.control(), None);
        assert_eq!(controller.current(), Preference::Light);
    }
}
