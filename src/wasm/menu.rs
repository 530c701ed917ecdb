//! Mobile navigation: a hamburger panel plus a nested "other" submenu
//! with a rotating arrow.

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::dom;

const HIDDEN_CLASS: &str = "hidden";
const ROTATED_CLASS: &str = "rotate-180";

pub fn init(document: &Document) -> Result<(), JsValue> {
    let menu_button = dom::by_id(document, "mobile-menu-button")?;
    let menu = dom::by_id(document, "mobile-menu")?;
    let other_button = dom::by_id(document, "mobile-other-button")?;
    let other_menu = dom::by_id(document, "mobile-other-menu")?;
    let other_arrow = dom::by_id(document, "mobile-other-arrow")?;

    dom::on_click(&menu_button, {
        let menu = menu.clone();
        move || {
            let _ = menu.class_list().toggle(HIDDEN_CLASS);
        }
    })?;

    dom::on_click(&other_button, {
        let other_menu = other_menu.clone();
        let other_arrow = other_arrow.clone();
        move || {
            let _ = other_menu.class_list().toggle(HIDDEN_CLASS);
            let _ = other_arrow.class_list().toggle(ROTATED_CLASS);
        }
    })?;

    // Following any link closes the panel and, if open, the submenu.
    for link in dom::elements(&menu.query_selector_all("a")?) {
        let menu = menu.clone();
        let other_menu = other_menu.clone();
        let other_arrow = other_arrow.clone();
        dom::on_click(&link, move || {
            let _ = menu.class_list().add_1(HIDDEN_CLASS);
            if !other_menu.class_list().contains(HIDDEN_CLASS) {
                let _ = other_menu.class_list().add_1(HIDDEN_CLASS);
                let _ = other_arrow.class_list().remove_1(ROTATED_CLASS);
            }
        })?;
    }
    Ok(())
}
