//! Browser entrypoint embedded into every generated page.

mod boot;

pub use boot::{boot_browser, boot_with, load_config};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    boot_browser();
}
