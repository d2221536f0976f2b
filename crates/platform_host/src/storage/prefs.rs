//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for string-valued preferences stored under a single key each.
///
/// Reads are infallible from the caller's point of view: an unavailable backend reads as an
/// absent value. Writes report failures so callers can log them.
pub trait PreferenceStore {
    /// Loads the raw value stored for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPreferenceStore;

impl PreferenceStore for NoopPreferenceStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a clone handed to a second controller behaves like the
/// same origin's storage seen after a page reload.
pub struct MemoryPreferenceStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    /// Creates a store pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Removes a key, as a user clearing site data would.
    pub fn clear(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Store whose reads are always empty and whose writes always fail.
///
/// Stands in for a browser with storage disabled (private mode, quota exhausted).
pub struct UnavailablePreferenceStore;

impl PreferenceStore for UnavailablePreferenceStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("preference storage unavailable".to_string())
    }
}
