//! Scroll-triggered fade-in for marked sections.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;

const SECTION_SELECTOR: &str = ".fade-in-section";
const VISIBLE_CLASS: &str = "visible";
const THRESHOLD: f64 = 0.1;

pub fn init(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                // Revealed once, a section stays revealed.
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in dom::elements(&document.query_selector_all(SECTION_SELECTOR)?) {
        observer.observe(&section);
    }
    Ok(())
}
