use glam::Vec3;

/// Impulse length of every throw.
pub const FIXED_MAGNITUDE: f32 = 10.0;

/// Pull-back-and-release launch impulse.
///
/// Points from the release position back toward (and past) the grab point.
/// Length is always `magnitude`, independent of how far or fast the controller
/// moved. `None` when the two points coincide.
pub fn launch_impulse(grab: Vec3, release: Vec3, magnitude: f32) -> Option<Vec3> {
    (grab - release).try_normalize().map(|dir| dir * magnitude)
}
