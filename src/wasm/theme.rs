//! Light/dark theme toggle, persisted to localStorage under the key
//! `theme`. The system color-scheme preference is the fallback when no
//! value has been stored yet.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Storage, Window};

use super::dom;
use super::render::Animator;

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";
const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(v: &str) -> Option<Self> {
        match v {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// The displayed theme: a `dark` marker class on the injected root plus
/// a pair of mutually exclusive icons.
pub struct ThemeToggle {
    root: Element,
    light_icon: Element,
    dark_icon: Element,
}

impl ThemeToggle {
    pub fn new(root: Element, light_icon: Element, dark_icon: Element) -> Self {
        Self {
            root,
            light_icon,
            dark_icon,
        }
    }

    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self::new(
            document.document_element().ok_or("no document element")?,
            dom::by_id(document, "theme-icon-light")?,
            dom::by_id(document, "theme-icon-dark")?,
        ))
    }

    pub fn apply(&self, theme: Theme) -> Result<(), JsValue> {
        match theme {
            Theme::Dark => {
                self.root.class_list().add_1(DARK_CLASS)?;
                self.light_icon.class_list().add_1(HIDDEN_CLASS)?;
                self.dark_icon.class_list().remove_1(HIDDEN_CLASS)?;
            }
            Theme::Light => {
                self.root.class_list().remove_1(DARK_CLASS)?;
                self.light_icon.class_list().remove_1(HIDDEN_CLASS)?;
                self.dark_icon.class_list().add_1(HIDDEN_CLASS)?;
            }
        }
        Ok(())
    }

    /// Read the displayed theme back off the root marker class.
    pub fn current(&self) -> Theme {
        if self.root.class_list().contains(DARK_CLASS) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

pub fn stored(win: &Window) -> Option<Theme> {
    storage(win)?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .as_deref()
        .and_then(Theme::from_str)
}

pub fn persist(win: &Window, theme: Theme) {
    if let Some(s) = storage(win) {
        let _ = s.set_item(STORAGE_KEY, theme.as_str());
    }
}

fn storage(win: &Window) -> Option<Storage> {
    win.local_storage().ok().flatten()
}

/// Stored preference first, system preference second, light otherwise.
pub fn resolve_initial(win: &Window) -> Theme {
    stored(win).unwrap_or_else(|| {
        if prefers_dark(win) {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

fn prefers_dark(win: &Window) -> bool {
    win.match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn init(win: &Window, document: &Document, animator: &Animator) -> Result<(), JsValue> {
    let toggle = ThemeToggle::from_document(document)?;
    toggle.apply(resolve_initial(win))?;

    let button = dom::by_id(document, "theme-toggle")?;
    let win = win.clone();
    let animator = animator.clone();
    dom::on_click(&button, move || {
        let next = toggle.current().toggle();
        persist(&win, next);
        if let Err(e) = toggle.apply(next) {
            log::error!("theme apply failed: {e:?}");
            return;
        }
        restart_after_commit(&win, &animator);
    })
}

// The animator re-measures its surfaces under the new theme. Waiting one
// animation frame makes sure the restyle has committed first.
fn restart_after_commit(win: &Window, animator: &Animator) {
    let handle = animator.clone();
    let cb = Closure::once_into_js(move || {
        if let Err(e) = handle.start() {
            log::error!("wave restart after theme change failed: {e:?}");
        }
    });
    if let Err(e) = win.request_animation_frame(cb.unchecked_ref()) {
        log::error!("failed to schedule wave restart: {e:?}");
    }
}
