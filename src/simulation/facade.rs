use wasm_bindgen::prelude::*;

use crate::core::logging::{init_logger, parse_level};
use crate::systems::render_sync::{SLOT_BALL, SLOT_GROUND, SLOT_RETICLE, VISUAL_SLOTS, VISUAL_STRIDE};

use super::perf_stats::FrameStats;
use super::SessionCore;

/// Where everything lives in the visual transfer buffer.
#[wasm_bindgen]
pub struct VisualLayout {
    buffer_ptr: u32,
    buffer_len_elements: u32,
    buffer_len_bytes: u32,
    stride: u32,
    slots: u32,
    ground_slot: u32,
    ball_slot: u32,
    reticle_slot: u32,
}

#[wasm_bindgen]
impl VisualLayout {
    #[wasm_bindgen(getter)]
    pub fn buffer_ptr(&self) -> u32 { self.buffer_ptr }
    #[wasm_bindgen(getter)]
    pub fn buffer_len_elements(&self) -> u32 { self.buffer_len_elements }
    #[wasm_bindgen(getter)]
    pub fn buffer_len_bytes(&self) -> u32 { self.buffer_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 { self.stride }
    #[wasm_bindgen(getter)]
    pub fn slots(&self) -> u32 { self.slots }
    #[wasm_bindgen(getter)]
    pub fn ground_slot(&self) -> u32 { self.ground_slot }
    #[wasm_bindgen(getter)]
    pub fn ball_slot(&self) -> u32 { self.ball_slot }
    #[wasm_bindgen(getter)]
    pub fn reticle_slot(&self) -> u32 { self.reticle_slot }
}

fn to_js(e: crate::core::SessionError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Session {
    core: SessionCore,
}

#[wasm_bindgen]
impl Session {
    /// Create a session with default config, driven by wall-clock time
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SessionCore::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame_count() }

    /// 0 = awaiting ground, 1 = awaiting ball, 2 = ready
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> u8 { self.core.phase().code() }

    #[wasm_bindgen(getter)]
    pub fn reticle_visible(&self) -> bool { self.core.reticle().visible }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.physics().body_count() }

    #[wasm_bindgen(getter)]
    pub fn throws(&self) -> u32 { self.core.interaction().throws() }

    /// 0 = idle, 1 = requested, 2 = acquired, 3 = unavailable
    #[wasm_bindgen(getter)]
    pub fn hit_test_status(&self) -> u8 { self.core.hit_test().state().code() }

    pub fn set_log_level(&self, level: &str) {
        init_logger(parse_level(level));
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_gravity(x, y, z);
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    // === CONTROLLER EVENTS ===

    /// `selectstart` with the controller's world position
    pub fn select_start(&mut self, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        self.core.select_start(x, y, z).map_err(to_js)
    }

    /// `selectend` with the controller's world position
    pub fn select_end(&mut self, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        self.core.select_end(x, y, z).map_err(to_js)
    }

    // === HIT-TEST CAPABILITY ===

    /// Host obtained a hit-test source for `ticket`
    pub fn hit_test_source_ready(&mut self, ticket: u32) -> Result<(), JsValue> {
        self.core.hit_test_source_ready(ticket).map_err(to_js)
    }

    /// Host failed to obtain a hit-test source for `ticket`
    pub fn hit_test_source_failed(&mut self, ticket: u32) -> Result<(), JsValue> {
        self.core.hit_test_source_failed(ticket).map_err(to_js)
    }

    /// XR session `end` event
    pub fn end_session(&mut self) {
        self.core.end_session();
    }

    // === FRAME ===

    /// Frame with XR tracking. `hit_matrices` holds the ordered hit-test
    /// results as consecutive column-major 4x4 matrices (empty when there
    /// is no source yet or nothing was hit).
    /// Returns a capability ticket to resolve, or 0 if none was issued.
    pub fn update(&mut self, hit_matrices: &[f32]) -> Result<u32, JsValue> {
        let ticket = self.core.frame_with_hits(hit_matrices).map_err(to_js)?;
        Ok(ticket.unwrap_or(0))
    }

    /// Frame without an XR frame (e.g. before the session starts).
    pub fn update_untracked(&mut self) {
        self.core.frame(None);
    }

    // === RENDER API ===

    /// Scene events since the last call, as a JSON array
    pub fn take_events_json(&mut self) -> String {
        self.core.take_events_json()
    }

    pub fn visual_buffer_ptr(&self) -> *const f32 {
        self.core.visual_buffer_ptr()
    }

    pub fn visual_buffer_len(&self) -> usize {
        self.core.visual_buffer_len()
    }

    pub fn reticle_matrix(&self) -> Vec<f32> {
        self.core.reticle_matrix()
    }

    /// Ball material color as 0xRRGGBB
    pub fn ball_color(&self) -> u32 {
        self.core.ball_color()
    }

    pub fn visual_layout(&self) -> VisualLayout {
        let len = self.core.visual_buffer_len();
        VisualLayout {
            buffer_ptr: self.core.visual_buffer_ptr() as u32,
            buffer_len_elements: len as u32,
            buffer_len_bytes: (len * std::mem::size_of::<f32>()) as u32,
            stride: VISUAL_STRIDE as u32,
            slots: VISUAL_SLOTS as u32,
            ground_slot: SLOT_GROUND as u32,
            ball_slot: SLOT_BALL as u32,
            reticle_slot: SLOT_RETICLE as u32,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
