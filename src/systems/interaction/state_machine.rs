//! InteractionStateMachine - turns select gestures into world mutations.
//!
//! Placement phases only advance on an actual placement. A press while the
//! reticle is hidden is swallowed and the phase stays put, so the user can
//! keep trying until a surface shows up.

use glam::Vec3;
use log::{debug, info};

use crate::core::SessionResult;
use crate::domain::{
    GestureCommand, GestureRecord, HighlightColor, PlacementPhase, SceneConfig, SceneEvent,
};
use crate::systems::hit_test::Reticle;
use crate::systems::physics::{BallBody, PhysicsWorld};
use crate::systems::render_sync::VisualScene;

use super::impulse::launch_impulse;

/// What a single gesture did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    GroundPlaced,
    BallPlaced,
    Armed { grab_position: Vec3 },
    Launched { impulse: Vec3 },
    /// Release landed on the grab point; nothing to throw.
    Fizzled,
    /// Press during placement with no surface under the reticle.
    NoSurface,
    /// Release with no armed grab (e.g. the one paired with the ball press).
    Ignored,
}

/// Everything a gesture may touch, borrowed from the session for one call.
pub struct InteractionContext<'a> {
    pub reticle: &'a mut Reticle,
    pub physics: &'a mut PhysicsWorld,
    pub visuals: &'a mut VisualScene,
    pub config: &'a SceneConfig,
    pub events: &'a mut Vec<SceneEvent>,
}

pub struct InteractionStateMachine {
    phase: PlacementPhase,
    gesture: GestureRecord,
    throws: u32,
}

impl InteractionStateMachine {
    pub fn new() -> Self {
        Self {
            phase: PlacementPhase::AwaitingGround,
            gesture: GestureRecord::default(),
            throws: 0,
        }
    }

    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    pub fn gesture(&self) -> &GestureRecord {
        &self.gesture
    }

    /// Completed launches so far.
    pub fn throws(&self) -> u32 {
        self.throws
    }

    pub fn handle(
        &mut self,
        command: GestureCommand,
        ctx: &mut InteractionContext<'_>,
    ) -> SessionResult<GestureOutcome> {
        match command {
            GestureCommand::Grab { .. } => self.on_grab(ctx),
            GestureCommand::Release { controller } => Ok(self.on_release(controller, ctx)),
        }
    }

    fn on_grab(&mut self, ctx: &mut InteractionContext<'_>) -> SessionResult<GestureOutcome> {
        match self.phase {
            PlacementPhase::AwaitingGround => {
                let Some(pose) = ctx.reticle.placement_pose() else {
                    debug!("select ignored: no surface for ground");
                    return Ok(GestureOutcome::NoSurface);
                };
                ctx.physics.add_ground(pose, ctx.config.ground_restitution)?;
                ctx.visuals.add_ground(pose);
                ctx.events.push(SceneEvent::GroundPlaced { position: pose.position });
                self.phase = PlacementPhase::AwaitingBall;
                info!("ground placed at {:?}", pose.position);
                Ok(GestureOutcome::GroundPlaced)
            }
            PlacementPhase::AwaitingBall => {
                let Some(pose) = ctx.reticle.placement_pose() else {
                    debug!("select ignored: no surface for ball");
                    return Ok(GestureOutcome::NoSurface);
                };
                ctx.physics.add_ball(BallBody::new(pose, &ctx.config.ball))?;
                ctx.visuals.add_ball(pose);
                ctx.reticle.retire();
                ctx.events.push(SceneEvent::BallPlaced { position: pose.position });
                ctx.events.push(SceneEvent::ReticleRetired);
                self.phase = PlacementPhase::Ready;
                info!("ball placed at {:?}", pose.position);
                Ok(GestureOutcome::BallPlaced)
            }
            PlacementPhase::Ready => {
                let Some(grab_position) = ctx.physics.ball().map(|ball| ball.position) else {
                    return Ok(GestureOutcome::Ignored);
                };
                ctx.physics.set_ball_highlight(HighlightColor::Armed);
                self.gesture.arm(grab_position);
                ctx.events.push(SceneEvent::BallArmed { grab_position });
                debug!("ball armed at {:?}", grab_position);
                Ok(GestureOutcome::Armed { grab_position })
            }
        }
    }

    fn on_release(&mut self, controller: Vec3, ctx: &mut InteractionContext<'_>) -> GestureOutcome {
        if self.phase.is_placing() {
            return GestureOutcome::Ignored;
        }
        let Some((grab, release)) = self.gesture.release(controller) else {
            debug!("release ignored: nothing armed");
            return GestureOutcome::Ignored;
        };
        match launch_impulse(grab, release, ctx.config.launch_magnitude) {
            Some(impulse) => {
                if !ctx.physics.apply_impulse(impulse) {
                    return GestureOutcome::Ignored;
                }
                ctx.physics.set_ball_highlight(HighlightColor::Launched);
                self.throws = self.throws.saturating_add(1);
                ctx.events.push(SceneEvent::BallLaunched { impulse });
                info!("ball launched with impulse {:?}", impulse);
                GestureOutcome::Launched { impulse }
            }
            None => {
                ctx.physics.set_ball_highlight(HighlightColor::Neutral);
                debug!("release at grab point; throw cancelled");
                GestureOutcome::Fizzled
            }
        }
    }
}

impl Default for InteractionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Transform;

    struct Rig {
        reticle: Reticle,
        physics: PhysicsWorld,
        visuals: VisualScene,
        config: SceneConfig,
        events: Vec<SceneEvent>,
        machine: InteractionStateMachine,
    }

    impl Rig {
        fn new() -> Self {
            let config = SceneConfig::default();
            Self {
                reticle: Reticle::new(),
                physics: PhysicsWorld::new(&config),
                visuals: VisualScene::new(),
                config,
                events: Vec::new(),
                machine: InteractionStateMachine::new(),
            }
        }

        fn send(&mut self, command: GestureCommand) -> GestureOutcome {
            let mut ctx = InteractionContext {
                reticle: &mut self.reticle,
                physics: &mut self.physics,
                visuals: &mut self.visuals,
                config: &self.config,
                events: &mut self.events,
            };
            self.machine.handle(command, &mut ctx).unwrap()
        }

        fn grab(&mut self) -> GestureOutcome {
            self.send(GestureCommand::Grab { controller: Vec3::ZERO })
        }

        fn release(&mut self, at: Vec3) -> GestureOutcome {
            self.send(GestureCommand::Release { controller: at })
        }

        fn place_both(&mut self) {
            self.reticle.show_at(Transform::from_position(Vec3::new(0.0, -1.0, -1.0)));
            assert_eq!(self.grab(), GestureOutcome::GroundPlaced);
            self.reticle.show_at(Transform::from_position(Vec3::new(0.0, 1.0, 0.0)));
            assert_eq!(self.grab(), GestureOutcome::BallPlaced);
        }
    }

    #[test]
    fn starts_awaiting_ground_with_no_bodies() {
        let rig = Rig::new();
        assert_eq!(rig.machine.phase(), PlacementPhase::AwaitingGround);
        assert_eq!(rig.physics.body_count(), 0);
    }

    // A press with no surface must not burn a placement turn.
    #[test]
    fn failed_placement_does_not_consume_a_turn() {
        let mut rig = Rig::new();
        for _ in 0..5 {
            assert_eq!(rig.grab(), GestureOutcome::NoSurface);
        }
        assert_eq!(rig.machine.phase(), PlacementPhase::AwaitingGround);
        assert_eq!(rig.physics.body_count(), 0);

        rig.reticle.show_at(Transform::from_position(Vec3::ZERO));
        assert_eq!(rig.grab(), GestureOutcome::GroundPlaced);
        rig.reticle.hide();
        assert_eq!(rig.grab(), GestureOutcome::NoSurface);
        assert_eq!(rig.machine.phase(), PlacementPhase::AwaitingBall);
        assert_eq!(rig.physics.body_count(), 1);
    }

    #[test]
    fn placement_snapshots_reticle_pose() {
        let mut rig = Rig::new();
        rig.place_both();
        assert_eq!(rig.machine.phase(), PlacementPhase::Ready);
        assert_eq!(
            rig.physics.ground().unwrap().transform.position,
            Vec3::new(0.0, -1.0, -1.0)
        );
        assert_eq!(rig.physics.ball().unwrap().position, Vec3::new(0.0, 1.0, 0.0));
        assert!(rig.reticle.retired);
        assert!(rig.visuals.ground.is_some() && rig.visuals.ball.is_some());
        assert_eq!(
            rig.events,
            vec![
                SceneEvent::GroundPlaced { position: Vec3::new(0.0, -1.0, -1.0) },
                SceneEvent::BallPlaced { position: Vec3::new(0.0, 1.0, 0.0) },
                SceneEvent::ReticleRetired,
            ]
        );
    }

    #[test]
    fn release_paired_with_ball_press_does_not_launch() {
        let mut rig = Rig::new();
        rig.place_both();
        assert_eq!(rig.release(Vec3::new(0.0, 1.0, 1.0)), GestureOutcome::Ignored);
        assert_eq!(rig.physics.ball().unwrap().velocity, Vec3::ZERO);
    }

    #[test]
    fn releases_during_placement_are_ignored() {
        let mut rig = Rig::new();
        assert_eq!(rig.release(Vec3::ONE), GestureOutcome::Ignored);
        assert_eq!(rig.machine.phase(), PlacementPhase::AwaitingGround);
    }

    #[test]
    fn grab_uses_ball_position_not_controller() {
        let mut rig = Rig::new();
        rig.place_both();
        let outcome = rig.send(GestureCommand::Grab { controller: Vec3::splat(7.0) });
        assert_eq!(outcome, GestureOutcome::Armed { grab_position: Vec3::new(0.0, 1.0, 0.0) });
        assert_eq!(rig.physics.ball().unwrap().highlight, HighlightColor::Armed);
    }

    #[test]
    fn release_applies_fixed_impulse_once() {
        let mut rig = Rig::new();
        rig.place_both();
        rig.grab();
        let outcome = rig.release(Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(outcome, GestureOutcome::Launched { impulse: Vec3::new(0.0, 0.0, -10.0) });
        let ball = rig.physics.ball().unwrap();
        // 10 kg ball: dv = J / m
        assert!(ball.velocity.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
        assert_eq!(ball.highlight, HighlightColor::Launched);

        // A second release without a new grab is a no-op.
        assert_eq!(rig.release(Vec3::new(0.0, 1.0, 1.0)), GestureOutcome::Ignored);
        assert!(rig.physics.ball().unwrap().velocity.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn release_on_grab_point_fizzles() {
        let mut rig = Rig::new();
        rig.place_both();
        rig.grab();
        assert_eq!(rig.release(Vec3::new(0.0, 1.0, 0.0)), GestureOutcome::Fizzled);
        assert_eq!(rig.physics.ball().unwrap().highlight, HighlightColor::Neutral);
        assert_eq!(rig.physics.ball().unwrap().velocity, Vec3::ZERO);
    }

    #[test]
    fn throw_loop_never_leaves_ready_or_adds_bodies() {
        let mut rig = Rig::new();
        rig.place_both();
        for i in 0..50 {
            rig.reticle.show_at(Transform::from_position(Vec3::splat(i as f32)));
            rig.grab();
            rig.release(Vec3::new(i as f32, 0.0, 3.0));
            assert_eq!(rig.machine.phase(), PlacementPhase::Ready);
            assert_eq!(rig.physics.body_count(), 2);
        }
        assert_eq!(rig.machine.throws(), 50);
        assert!(!rig.reticle.visible);
    }
}
