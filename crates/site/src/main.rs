//! Binary entrypoint for the browser-hosted theme toggle.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `theme_toggle_app` for wasm32 with the `csr` feature and embed the output in generated pages."
    );
}
