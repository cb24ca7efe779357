use glam::Vec3;

use crate::core::SessionResult;
use crate::domain::SceneConfig;
use crate::systems::physics::FixedStepper;

use super::perf_stats::FrameStats;
use super::SessionCore;

pub(super) fn enable_perf_metrics(session: &mut SessionCore, enabled: bool) {
    session.perf_enabled = enabled;
    if !enabled {
        session.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(session: &SessionCore) -> FrameStats {
    session.perf_stats.clone()
}

pub(super) fn set_gravity(session: &mut SessionCore, x: f32, y: f32, z: f32) {
    let gravity = Vec3::new(x, y, z);
    if !gravity.is_finite() {
        log::warn!("ignoring non-finite gravity {:?}", gravity);
        return;
    }
    session.config.gravity = gravity;
    session.physics.set_gravity(gravity);
}

/// Replace the active config. Bodies already placed keep the material
/// values they were created with; timing and gravity apply from the next frame.
pub(super) fn load_config_json(session: &mut SessionCore, json: &str) -> SessionResult<()> {
    let config = SceneConfig::from_json(json)?;
    session.physics.set_gravity(config.gravity);
    session.physics.set_dt(config.fixed_timestep);
    session.stepper = FixedStepper::new(config.fixed_timestep, config.max_substeps);
    session.config = config;
    log::info!("scene config loaded");
    Ok(())
}
