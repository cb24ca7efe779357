//! XR Golf Engine - interaction and physics core for a WebXR hit-test demo
//!
//! The JS host owns rendering and the XR session. This crate owns the logic:
//! - core/        - errors, logging, clocks
//! - domain/      - poses, phases, gestures, config, scene events
//! - systems/     - hit-test reconciliation, interaction, physics, render sync
//! - simulation/  - the per-session state and its wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logger(log::LevelFilter::Info);
    log::info!("⛳ XR Golf engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Fixed physics step, in seconds, used by default
#[wasm_bindgen]
pub fn default_fixed_timestep() -> f32 {
    domain::SceneConfig::default().fixed_timestep
}

/// Launch impulse length used by default
#[wasm_bindgen]
pub fn default_launch_magnitude() -> f32 {
    systems::interaction::FIXED_MAGNITUDE
}

// Re-export main types
pub use crate::core::{SessionError, SessionResult};
pub use domain::{PlacementPhase, SceneConfig, SceneEvent, Transform};
pub use simulation::{FrameStats, Session, SessionCore, VisualLayout};
pub use systems::hit_test::TrackingFrame;
