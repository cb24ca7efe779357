//! RenderSync - physics -> visual copy, once per frame.
//!
//! Visual transforms are owned here, not by the physics bodies. The copy is
//! strictly one-way: nothing in this module takes `&mut PhysicsWorld`.
//!
//! The host reads the packed transfer buffer straight out of wasm memory.
//! Each slot is `VISUAL_STRIDE` floats:
//! `[visible, px, py, pz, qx, qy, qz, qw, sx, sy, sz]`
//! in slot order ground, ball, reticle.

use crate::domain::{HighlightColor, Transform};
use crate::systems::hit_test::Reticle;
use crate::systems::physics::PhysicsWorld;

pub const VISUAL_STRIDE: usize = 11;
pub const SLOT_GROUND: usize = 0;
pub const SLOT_BALL: usize = 1;
pub const SLOT_RETICLE: usize = 2;
pub const VISUAL_SLOTS: usize = 3;

/// Transform of one drawable as the renderer should show it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualTransform {
    pub transform: Transform,
    pub visible: bool,
}

/// Drawables mirrored from the simulation.
#[derive(Default)]
pub struct VisualScene {
    pub ground: Option<VisualTransform>,
    pub ball: Option<VisualTransform>,
    pub reticle: VisualTransform,
    pub ball_highlight: HighlightColor,
    buffer: Vec<f32>,
}

impl VisualScene {
    pub fn new() -> Self {
        Self {
            buffer: vec![0.0; VISUAL_SLOTS * VISUAL_STRIDE],
            ..Default::default()
        }
    }

    /// Add the ground drawable at its placement pose.
    pub fn add_ground(&mut self, transform: Transform) {
        self.ground = Some(VisualTransform { transform, visible: true });
    }

    /// Add the ball drawable at its placement pose.
    pub fn add_ball(&mut self, transform: Transform) {
        self.ball = Some(VisualTransform { transform, visible: true });
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Copy body position/orientation into the visuals and repack the buffer.
    /// Scale keeps whatever was snapshotted at placement.
    pub fn sync(&mut self, physics: &PhysicsWorld, reticle: &Reticle) {
        if let (Some(visual), Some(body)) = (self.ground.as_mut(), physics.ground()) {
            visual.transform.position = body.transform.position;
            visual.transform.orientation = body.transform.orientation;
        }
        if let (Some(visual), Some(body)) = (self.ball.as_mut(), physics.ball()) {
            visual.transform.position = body.position;
            visual.transform.orientation = body.orientation;
            self.ball_highlight = body.highlight;
        }
        self.reticle = VisualTransform {
            transform: reticle.pose,
            visible: reticle.visible,
        };
        self.pack();
    }

    fn pack(&mut self) {
        if self.buffer.len() != VISUAL_SLOTS * VISUAL_STRIDE {
            self.buffer.resize(VISUAL_SLOTS * VISUAL_STRIDE, 0.0);
        }
        write_slot(&mut self.buffer, SLOT_GROUND, self.ground.as_ref());
        write_slot(&mut self.buffer, SLOT_BALL, self.ball.as_ref());
        write_slot(&mut self.buffer, SLOT_RETICLE, Some(&self.reticle));
    }
}

fn write_slot(buffer: &mut [f32], slot: usize, visual: Option<&VisualTransform>) {
    let out = &mut buffer[slot * VISUAL_STRIDE..(slot + 1) * VISUAL_STRIDE];
    let Some(visual) = visual else {
        out.fill(0.0);
        return;
    };
    let t = &visual.transform;
    out[0] = if visual.visible { 1.0 } else { 0.0 };
    out[1..4].copy_from_slice(&t.position.to_array());
    out[4..8].copy_from_slice(&t.orientation.to_array());
    out[8..11].copy_from_slice(&t.scale.to_array());
}
