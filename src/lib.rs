//! Front-end behaviors for the portfolio page: a persisted light/dark
//! theme toggle, the mobile navigation menu, the animated dot-wave
//! background, scroll-triggered reveals and the projects list toggle.
//!
//! Only the [`wave`] pulse math compiles on every target; everything
//! DOM-facing lives in the wasm-gated module below.

pub mod wave;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    mod dom;
    pub mod menu;
    pub mod projects;
    pub mod render;
    pub mod reveal;
    pub mod theme;

    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Theme first so the animator's initial frame picks up the right
        // dot color.
        let animator = render::Animator::from_document(&document)?;
        theme::init(&window, &document, &animator)?;
        animator.start()?;
        render::hook_resize(&animator)?;

        menu::init(&document)?;
        reveal::init(&document)?;
        projects::init(&document)?;

        log::info!("portfolio behaviors wired");
        Ok(())
    }
}
