//! "View More" / "View Less" toggle for the projects list.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element};

use super::dom;

const EXPANDED_LABEL: &str = "View Less";
const COLLAPSED_LABEL: &str = "View More";
const HIDDEN_CLASS: &str = "hidden";
const VISIBLE_CLASS: &str = "visible";
const FADE_CLASS: &str = "fade-in-section";

pub struct ProjectsToggle {
    label: Element,
    chevron_down: Element,
    chevron_up: Element,
    extras: Vec<Element>,
}

impl ProjectsToggle {
    pub fn new(
        label: Element,
        chevron_down: Element,
        chevron_up: Element,
        extras: Vec<Element>,
    ) -> Self {
        Self {
            label,
            chevron_down,
            chevron_up,
            extras,
        }
    }

    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self::new(
            dom::by_id(document, "toggle-btn-text")?,
            dom::by_id(document, "chevron-down")?,
            dom::by_id(document, "chevron-up")?,
            dom::elements(&document.query_selector_all(".extra-project")?),
        ))
    }

    pub fn is_expanded(&self) -> bool {
        self.label.text_content().as_deref() == Some(EXPANDED_LABEL)
    }

    /// Unhide the extras, then mark them visible once the unhidden
    /// layout has committed so the fade transition actually plays.
    pub fn expand(&self) -> Result<(), JsValue> {
        for extra in &self.extras {
            extra.class_list().remove_1(HIDDEN_CLASS)?;
            mark_visible_after_commit(extra.clone());
        }
        self.label.set_text_content(Some(EXPANDED_LABEL));
        self.chevron_down.class_list().add_1(HIDDEN_CLASS)?;
        self.chevron_up.class_list().remove_1(HIDDEN_CLASS)?;
        Ok(())
    }

    /// Re-hide immediately, without waiting for the fade-out transition.
    /// Collapse is meant to feel instant.
    pub fn collapse(&self) -> Result<(), JsValue> {
        for extra in &self.extras {
            extra.class_list().remove_1(VISIBLE_CLASS)?;
        }
        for extra in &self.extras {
            extra.class_list().add_1(FADE_CLASS)?;
            extra.class_list().add_1(HIDDEN_CLASS)?;
        }
        self.label.set_text_content(Some(COLLAPSED_LABEL));
        self.chevron_down.class_list().remove_1(HIDDEN_CLASS)?;
        self.chevron_up.class_list().add_1(HIDDEN_CLASS)?;
        Ok(())
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let toggle = ProjectsToggle::from_document(document)?;
    let button = dom::by_id(document, "toggle-projects-btn")?;
    dom::on_click(&button, move || {
        let result = if toggle.is_expanded() {
            toggle.collapse()
        } else {
            toggle.expand()
        };
        if let Err(e) = result {
            log::error!("projects toggle failed: {e:?}");
        }
    })
}

fn mark_visible_after_commit(extra: Element) {
    let Some(win) = window() else { return };
    let cb = Closure::once_into_js(move || {
        let _ = extra.class_list().remove_1(FADE_CLASS);
        let _ = extra.class_list().add_1(VISIBLE_CLASS);
    });
    if let Err(e) = win.request_animation_frame(cb.unchecked_ref()) {
        log::error!("failed to schedule reveal of extra project: {e:?}");
    }
}
