// Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use portfolio_core::Paint;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn canvas_accepts_fade_paint() {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web::HtmlCanvasElement>()
        .unwrap();
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web::CanvasRenderingContext2d>()
        .unwrap();
    let fade = Paint::Rgba {
        r: 10,
        g: 15,
        b: 26,
        a: 0.1,
    };
    ctx.set_fill_style_str(&fade.to_string());
    assert_eq!(
        ctx.fill_style().as_string().as_deref(),
        Some("rgba(10, 15, 26, 0.1)")
    );
}

#[wasm_bindgen_test]
fn field_lifecycle_mount_stop_resume_unmount() {
    let doc = document();
    let hero = doc.create_element("div").unwrap();
    hero.set_class_name("hero");
    hero.set_attribute("style", "width: 320px; height: 200px;")
        .unwrap();
    doc.body().unwrap().append_child(&hero).unwrap();

    assert!(portfolio_web::mount_ambient_field().unwrap());
    assert!(portfolio_web::ambient_field_running());
    let canvas = hero.first_element_child().unwrap();
    assert_eq!(canvas.class_name(), "fluid-canvas");
    let canvas = canvas.dyn_into::<web::HtmlCanvasElement>().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (320, 200));

    portfolio_web::stop_ambient_field();
    assert!(!portfolio_web::ambient_field_running());
    // stopping keeps the canvas on the page
    assert!(doc.query_selector(".fluid-canvas").unwrap().is_some());

    portfolio_web::resume_ambient_field().unwrap();
    assert!(portfolio_web::ambient_field_running());

    portfolio_web::unmount_ambient_field();
    assert!(!portfolio_web::ambient_field_running());
    assert!(doc.query_selector(".fluid-canvas").unwrap().is_none());

    hero.remove();
    assert!(!portfolio_web::mount_ambient_field().unwrap());
    assert!(!portfolio_web::ambient_field_running());
}
