//! Browser entry point; trunk builds this binary to wasm with the `csr`
//! feature. The native build (used for unit tests) is a no-op.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(discovery::app::App);
    }
}
