use glam::{Quat, Vec3};

use crate::domain::{BallConfig, HighlightColor, Transform};

/// Static ground plane, anchored where the surface was hit.
pub struct GroundBody {
    /// Snapshot of the hit pose. Never written after placement.
    pub transform: Transform,
    /// Surface normal (pose local +Y in world space).
    pub normal: Vec3,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl GroundBody {
    pub fn new(transform: Transform, restitution: f32) -> Self {
        let normal = (transform.orientation * Vec3::Y)
            .try_normalize()
            .unwrap_or(Vec3::Y);
        Self { transform, normal, restitution }
    }

    /// Signed distance of the plane from the origin along its normal.
    #[inline]
    pub fn plane_distance(&self) -> f32 {
        self.normal.dot(self.transform.position)
    }
}

/// Dynamic ball - the only body that moves.
pub struct BallBody {
    // === Physics State ===
    /// World position (center of mass)
    pub position: Vec3,
    pub orientation: Quat,
    /// Kept from the placement pose; physics ignores it.
    pub scale: Vec3,
    /// Linear velocity (m/s)
    pub velocity: Vec3,
    /// Angular velocity (rad/s)
    pub angular_velocity: Vec3,

    // === Mass Properties ===
    pub mass: f32,
    pub inv_mass: f32,
    pub radius: f32,
    /// Solid sphere: I = 2/5 m r²
    pub inv_inertia: f32,

    // === Material properties ===
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub restitution: f32,
    pub friction: f32,

    /// User feedback only; physics never reads it.
    pub highlight: HighlightColor,
}

impl BallBody {
    pub fn new(transform: Transform, config: &BallConfig) -> Self {
        let inertia = 0.4 * config.mass * config.radius * config.radius;
        Self {
            position: transform.position,
            orientation: transform.orientation,
            scale: transform.scale,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: config.mass,
            inv_mass: 1.0 / config.mass,
            radius: config.radius,
            inv_inertia: if inertia > 0.0 { 1.0 / inertia } else { 0.0 },
            linear_damping: config.linear_damping,
            angular_damping: config.angular_damping,
            restitution: config.restitution,
            friction: config.friction,
            highlight: HighlightColor::Neutral,
        }
    }

    /// Apply impulse at center of mass (no torque).
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Apply impulse at a world-space point.
    pub fn apply_impulse_at_point(&mut self, impulse: Vec3, point: Vec3) {
        self.velocity += impulse * self.inv_mass;
        let r = point - self.position;
        self.angular_velocity += r.cross(impulse) * self.inv_inertia;
    }

    /// Velocity of a point on the surface.
    pub fn velocity_at_point(&self, point: Vec3) -> Vec3 {
        self.velocity + self.angular_velocity.cross(point - self.position)
    }
}
