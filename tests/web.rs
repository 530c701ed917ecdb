#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlCanvasElement};

use portfolio_wasm::wasm::projects::ProjectsToggle;
use portfolio_wasm::wasm::render::Animator;
use portfolio_wasm::wasm::theme::{self, Theme, ThemeToggle};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn div(document: &Document) -> Element {
    document.create_element("div").unwrap()
}

fn fixture_canvas(document: &Document) -> HtmlCanvasElement {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    let style = canvas.style();
    style.set_property("display", "block").unwrap();
    style.set_property("width", "120px").unwrap();
    style.set_property("height", "90px").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn theme_apply_reflects_marker_and_icons() {
    let doc = document();
    let (root, light, dark) = (div(&doc), div(&doc), div(&doc));
    let toggle = ThemeToggle::new(root.clone(), light.clone(), dark.clone());

    toggle.apply(Theme::Dark).unwrap();
    assert_eq!(toggle.current(), Theme::Dark);
    assert!(root.class_list().contains("dark"));
    assert!(light.class_list().contains("hidden"));
    assert!(!dark.class_list().contains("hidden"));

    toggle.apply(Theme::Light).unwrap();
    assert_eq!(toggle.current(), Theme::Light);
    assert!(!root.class_list().contains("dark"));
    assert!(!light.class_list().contains("hidden"));
    assert!(dark.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn toggling_twice_restores_the_original_theme() {
    let doc = document();
    let toggle = ThemeToggle::new(div(&doc), div(&doc), div(&doc));
    toggle.apply(Theme::Light).unwrap();

    let original = toggle.current();
    toggle.apply(original.toggle()).unwrap();
    toggle.apply(toggle.current().toggle()).unwrap();
    assert_eq!(toggle.current(), original);
}

#[wasm_bindgen_test]
fn stored_preference_round_trips_and_wins() {
    let win = web_sys::window().unwrap();
    theme::persist(&win, Theme::Dark);
    assert_eq!(theme::stored(&win), Some(Theme::Dark));
    assert_eq!(theme::resolve_initial(&win), Theme::Dark);

    theme::persist(&win, Theme::Light);
    assert_eq!(theme::stored(&win), Some(Theme::Light));
    assert_eq!(theme::resolve_initial(&win), Theme::Light);
}

#[wasm_bindgen_test]
fn restart_keeps_a_single_loop_over_two_surfaces() {
    let doc = document();
    let animator = Animator::new(fixture_canvas(&doc), fixture_canvas(&doc));

    animator.start().unwrap();
    animator.start().unwrap();

    assert_eq!(animator.surface_count(), 2);
    assert!(animator.is_scheduled());
}

#[wasm_bindgen_test]
fn view_more_toggle_round_trips() {
    let doc = document();
    let label = div(&doc);
    label.set_text_content(Some("View More"));
    let (down, up) = (div(&doc), div(&doc));
    up.class_list().add_1("hidden").unwrap();

    let extras = vec![div(&doc), div(&doc)];
    for extra in &extras {
        extra.class_list().add_1("extra-project").unwrap();
        extra.class_list().add_1("fade-in-section").unwrap();
        extra.class_list().add_1("hidden").unwrap();
    }

    let toggle = ProjectsToggle::new(label.clone(), down.clone(), up.clone(), extras.clone());
    assert!(!toggle.is_expanded());

    toggle.expand().unwrap();
    assert!(toggle.is_expanded());
    assert_eq!(label.text_content().as_deref(), Some("View Less"));
    for extra in &extras {
        assert!(!extra.class_list().contains("hidden"));
    }
    assert!(down.class_list().contains("hidden"));
    assert!(!up.class_list().contains("hidden"));

    toggle.collapse().unwrap();
    assert!(!toggle.is_expanded());
    assert_eq!(label.text_content().as_deref(), Some("View More"));
    for extra in &extras {
        assert!(extra.class_list().contains("hidden"));
        assert!(extra.class_list().contains("fade-in-section"));
        assert!(!extra.class_list().contains("visible"));
    }
    assert!(!down.class_list().contains("hidden"));
    assert!(up.class_list().contains("hidden"));
}
