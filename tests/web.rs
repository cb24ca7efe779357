#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use xr_golf_engine::Session;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_runs_in_the_browser() {
    xr_golf_engine::init();
    let mut session = Session::new();
    let ticket = session.update(&[]).unwrap();
    session.hit_test_source_ready(ticket).unwrap();
    assert!(session.hit_test_source_ready(ticket).is_err());

    let floor = xr_golf_engine::Transform::IDENTITY.to_cols_array();
    session.update(&floor).unwrap();
    assert!(session.reticle_visible());
}

#[wasm_bindgen_test]
fn bad_hit_buffer_is_a_js_error() {
    let mut session = Session::new();
    assert!(session.update(&[0.0; 5]).is_err());
}
