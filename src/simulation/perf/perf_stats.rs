use wasm_bindgen::prelude::*;

/// Per-frame timing and counters, filled only while perf metrics are on.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) frame_ms: f64,
    pub(super) reconcile_ms: f64,
    pub(super) commands_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) hit_results: u32,
    pub(super) commands_queued: u32,
    pub(super) commands_drained: u32,
    pub(super) substeps: u32,
    pub(super) body_count: u32,
    pub(super) phase: u32,
    pub(super) sim_time: f64,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn reconcile_ms(&self) -> f64 { self.reconcile_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_ms(&self) -> f64 { self.commands_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn hit_results(&self) -> u32 { self.hit_results }
    #[wasm_bindgen(getter)]
    pub fn commands_queued(&self) -> u32 { self.commands_queued }
    #[wasm_bindgen(getter)]
    pub fn commands_drained(&self) -> u32 { self.commands_drained }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> u32 { self.phase }
    #[wasm_bindgen(getter)]
    pub fn sim_time(&self) -> f64 { self.sim_time }
}
