use glam::{Quat, Vec3};

use crate::core::{SessionError, SessionResult};
use crate::domain::{HighlightColor, SceneConfig, Transform};

use super::body::{BallBody, GroundBody};
use super::collision::{resolve_contact, sphere_plane};

/// Owns the (at most one) ground and (at most one) ball and advances them.
pub struct PhysicsWorld {
    ground: Option<GroundBody>,
    ball: Option<BallBody>,
    gravity: Vec3,
    dt: f32,
    /// Simulated seconds so far.
    sim_time: f64,
    /// Fixed steps taken so far.
    steps: u64,
}

impl PhysicsWorld {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            ground: None,
            ball: None,
            gravity: config.gravity,
            dt: config.fixed_timestep,
            sim_time: 0.0,
            steps: 0,
        }
    }

    pub fn add_ground(&mut self, transform: Transform, restitution: f32) -> SessionResult<()> {
        if self.ground.is_some() {
            return Err(SessionError::AlreadyPlaced("ground"));
        }
        self.ground = Some(GroundBody::new(transform, restitution));
        Ok(())
    }

    pub fn add_ball(&mut self, ball: BallBody) -> SessionResult<()> {
        if self.ground.is_none() {
            return Err(SessionError::GroundMissing);
        }
        if self.ball.is_some() {
            return Err(SessionError::AlreadyPlaced("ball"));
        }
        self.ball = Some(ball);
        Ok(())
    }

    pub fn ground(&self) -> Option<&GroundBody> {
        self.ground.as_ref()
    }

    pub fn ball(&self) -> Option<&BallBody> {
        self.ball.as_ref()
    }

    pub fn body_count(&self) -> usize {
        self.ground.is_some() as usize + self.ball.is_some() as usize
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    pub fn set_dt(&mut self, dt: f32) {
        self.dt = dt;
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Apply an impulse through the ball's center of mass.
    /// Returns false when there is no ball yet.
    pub fn apply_impulse(&mut self, impulse: Vec3) -> bool {
        match self.ball.as_mut() {
            Some(ball) => {
                ball.apply_impulse(impulse);
                true
            }
            None => false,
        }
    }

    /// Set the ball's feedback color. Returns false when there is no ball yet.
    pub fn set_ball_highlight(&mut self, highlight: HighlightColor) -> bool {
        match self.ball.as_mut() {
            Some(ball) => {
                ball.highlight = highlight;
                true
            }
            None => false,
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        let dt = self.dt;
        if let Some(ball) = self.ball.as_mut() {
            // Integrate velocity
            ball.velocity += self.gravity * dt;
            ball.velocity *= (1.0 - ball.linear_damping).powf(dt);
            ball.angular_velocity *= (1.0 - ball.angular_damping).powf(dt);

            if let Some(ground) = self.ground.as_ref() {
                if let Some(contact) = sphere_plane(ball, ground) {
                    resolve_contact(ball, ground, &contact);
                }
            }

            // Integrate position
            ball.position += ball.velocity * dt;
            let w = ball.angular_velocity;
            if w != Vec3::ZERO {
                let q = ball.orientation;
                let dq = Quat::from_xyzw(w.x, w.y, w.z, 0.0) * q * (0.5 * dt);
                ball.orientation = (q + dq).normalize();
            }
        }
        self.sim_time += dt as f64;
        self.steps += 1;
    }
}
