use std::collections::VecDeque;

use crate::core::FrameClock;
use crate::domain::SceneConfig;
use crate::systems::hit_test::{HitTestReconciler, Reticle};
use crate::systems::interaction::InteractionStateMachine;
use crate::systems::physics::{FixedStepper, PhysicsWorld};
use crate::systems::render_sync::VisualScene;

use super::perf_stats::FrameStats;
use super::SessionCore;

pub(super) fn create_session_core(config: SceneConfig, clock: Box<dyn FrameClock>) -> SessionCore {
    let physics = PhysicsWorld::new(&config);
    let stepper = FixedStepper::new(config.fixed_timestep, config.max_substeps);
    let reticle = Reticle::new();
    let mut visuals = VisualScene::new();
    visuals.sync(&physics, &reticle);

    SessionCore {
        config,
        reticle,
        hit_test: HitTestReconciler::new(),
        interaction: InteractionStateMachine::new(),
        physics,
        stepper,
        visuals,
        clock,
        pending: VecDeque::with_capacity(8),
        events: Vec::with_capacity(8),
        frame: 0,
        perf_enabled: false,
        perf_stats: FrameStats::default(),
    }
}
