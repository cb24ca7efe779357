//! Session - one XR golf session, owned in a single place.
//!
//! Every piece of mutable state (reticle, placement phase, bodies, pending
//! gestures, capability handshake) lives in `SessionCore` and is threaded
//! through `frame()` explicitly. There are no globals.
//!
//! Per frame:
//! 1. hit-test results -> reticle
//! 2. queued gestures -> interaction state machine
//! 3. fixed-step physics
//! 4. physics -> visuals

use std::collections::VecDeque;

use crate::core::{FrameClock, SessionResult};
use crate::domain::{GestureCommand, PlacementPhase, SceneConfig, SceneEvent};
use crate::systems::hit_test::{CapabilityTicket, HitTestReconciler, Reticle, TrackingFrame};
use crate::systems::interaction::InteractionStateMachine;
use crate::systems::physics::{FixedStepper, PhysicsWorld};
use crate::systems::render_sync::VisualScene;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/frame.rs"]
mod frame;
#[path = "step/step_physics.rs"]
mod step_physics;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{Session, VisualLayout};
pub use perf_stats::FrameStats;

use perf_timer::PerfTimer;

/// The session state.
pub struct SessionCore {
    config: SceneConfig,
    reticle: Reticle,
    hit_test: HitTestReconciler,
    interaction: InteractionStateMachine,
    physics: PhysicsWorld,
    stepper: FixedStepper,
    visuals: VisualScene,
    clock: Box<dyn FrameClock>,

    // Gestures land here between frames
    pending: VecDeque<GestureCommand>,
    // Drained by the host after each frame
    events: Vec<SceneEvent>,

    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl SessionCore {
    /// Session with default config, driven by real time.
    pub fn new() -> Self {
        init::create_session_core(SceneConfig::default(), Box::new(crate::core::WallClock::new()))
    }

    /// Session with an explicit config and clock.
    pub fn with_clock(config: SceneConfig, clock: Box<dyn FrameClock>) -> SessionResult<Self> {
        config.validate()?;
        Ok(init::create_session_core(config, clock))
    }

    pub fn frame_count(&self) -> u64 { self.frame }

    pub fn phase(&self) -> PlacementPhase { self.interaction.phase() }

    pub fn reticle(&self) -> &Reticle { &self.reticle }

    pub fn physics(&self) -> &PhysicsWorld { &self.physics }

    pub fn visuals(&self) -> &VisualScene { &self.visuals }

    pub fn interaction(&self) -> &InteractionStateMachine { &self.interaction }

    pub fn hit_test(&self) -> &HitTestReconciler { &self.hit_test }

    pub fn config(&self) -> &SceneConfig { &self.config }

    // === SETTINGS ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        settings::set_gravity(self, x, y, z);
    }

    pub fn load_config_json(&mut self, json: &str) -> SessionResult<()> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    // === INPUT ===

    /// Queue a `selectstart` from the controller at (x, y, z).
    pub fn select_start(&mut self, x: f32, y: f32, z: f32) -> SessionResult<()> {
        commands::select_start(self, x, y, z)
    }

    /// Queue a `selectend` from the controller at (x, y, z).
    pub fn select_end(&mut self, x: f32, y: f32, z: f32) -> SessionResult<()> {
        commands::select_end(self, x, y, z)
    }

    pub fn pending_gestures(&self) -> usize {
        self.pending.len()
    }

    // === HIT-TEST CAPABILITY ===

    pub fn hit_test_source_ready(&mut self, ticket: CapabilityTicket) -> SessionResult<()> {
        self.hit_test.resolve(ticket)
    }

    pub fn hit_test_source_failed(&mut self, ticket: CapabilityTicket) -> SessionResult<()> {
        self.hit_test.fail(ticket)
    }

    /// XR session ended. Placement state survives; the capability does not.
    pub fn end_session(&mut self) {
        self.hit_test.end_session(&mut self.reticle);
        self.pending.clear();
        self.stepper.reset();
        self.visuals.sync(&self.physics, &self.reticle);
        log::info!("xr session ended after {} frames", self.frame);
    }

    // === FRAME ===

    /// Run one frame. `tracking` is `None` when the host had no XR frame.
    /// Returns a capability ticket the host must act on, if this frame issued one.
    pub fn frame(&mut self, tracking: Option<&TrackingFrame>) -> Option<CapabilityTicket> {
        frame::frame(self, tracking)
    }

    /// Run one frame from a flat buffer of hit-test pose matrices.
    pub fn frame_with_hits(&mut self, hit_matrices: &[f32]) -> SessionResult<Option<CapabilityTicket>> {
        let tracking = TrackingFrame::from_matrix_buffer(hit_matrices)?;
        Ok(self.frame(Some(&tracking)))
    }

    // === RENDER EXTRACTION ===

    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        render_extract::take_events(self)
    }

    pub fn take_events_json(&mut self) -> String {
        render_extract::take_events_json(self)
    }

    pub fn visual_buffer_ptr(&self) -> *const f32 {
        self.visuals.buffer_ptr()
    }

    pub fn visual_buffer_len(&self) -> usize {
        self.visuals.buffer_len()
    }

    pub fn reticle_matrix(&self) -> Vec<f32> {
        render_extract::reticle_matrix(self)
    }

    pub fn ball_color(&self) -> u32 {
        render_extract::ball_color(self)
    }
}

impl Default for SessionCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
