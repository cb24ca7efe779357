use glam::Vec3;

use super::body::{BallBody, GroundBody};

/// Approach speed below which a contact is treated as resting (no bounce).
const RESTING_SPEED: f32 = 0.2;

/// Ball touching the ground plane.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Contact point on the plane.
    pub point: Vec3,
    /// Plane normal, pointing from the ground toward the ball.
    pub normal: Vec3,
    /// Penetration depth.
    pub depth: f32,
}

/// Sphere-vs-plane test. The plane is one-sided: a ball fully behind it is
/// still reported, so it gets pushed back out instead of falling through.
pub fn sphere_plane(ball: &BallBody, ground: &GroundBody) -> Option<Contact> {
    let dist = ball.position.dot(ground.normal) - ground.plane_distance();
    if dist < ball.radius {
        Some(Contact {
            point: ball.position - ground.normal * dist,
            normal: ground.normal,
            depth: ball.radius - dist,
        })
    } else {
        None
    }
}

/// Resolve a contact against the static ground: restitution along the
/// normal, clamped Coulomb friction along the tangent, then positional
/// correction so the ball does not sink.
pub fn resolve_contact(ball: &mut BallBody, ground: &GroundBody, contact: &Contact) {
    let surface_point = ball.position - contact.normal * ball.radius;
    let relative_vel = ball.velocity_at_point(surface_point);
    let vn = relative_vel.dot(contact.normal);

    if vn < 0.0 {
        let e = if vn < -RESTING_SPEED {
            (ball.restitution + ground.restitution) * 0.5
        } else {
            0.0
        };
        let r = surface_point - ball.position;
        let rn = r.cross(contact.normal);
        let k = ball.inv_mass + rn.dot(rn) * ball.inv_inertia;
        let j = -(1.0 + e) * vn / k;
        ball.apply_impulse_at_point(contact.normal * j, surface_point);

        let tangent = (relative_vel - contact.normal * vn).normalize_or_zero();
        if tangent != Vec3::ZERO {
            let vt = relative_vel.dot(tangent);
            let rt = r.cross(tangent);
            let kt = ball.inv_mass + rt.dot(rt) * ball.inv_inertia;
            let jt = (-vt / kt).clamp(-j * ball.friction, j * ball.friction);
            ball.apply_impulse_at_point(tangent * jt, surface_point);
        }
    }

    let slop = 0.001;
    let percent = 0.8;
    ball.position += contact.normal * (contact.depth - slop).max(0.0) * percent;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BallConfig, Transform};

    fn ground() -> GroundBody {
        GroundBody::new(Transform::IDENTITY, 0.3)
    }

    fn ball_at(y: f32) -> BallBody {
        BallBody::new(Transform::from_position(Vec3::new(0.0, y, 0.0)), &BallConfig::default())
    }

    #[test]
    fn no_contact_above_radius() {
        assert!(sphere_plane(&ball_at(0.5), &ground()).is_none());
    }

    #[test]
    fn penetrating_ball_reports_depth() {
        let contact = sphere_plane(&ball_at(0.05), &ground()).unwrap();
        assert!((contact.depth - 0.05).abs() < 1e-6);
        assert_eq!(contact.normal, Vec3::Y);
        assert!(contact.point.abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn falling_ball_bounces_up_and_is_pushed_out() {
        let g = ground();
        let mut ball = ball_at(0.05);
        ball.velocity = Vec3::new(0.0, -2.0, 0.0);
        let contact = sphere_plane(&ball, &g).unwrap();
        resolve_contact(&mut ball, &g, &contact);
        assert!(ball.velocity.y > 0.0);
        assert!(ball.position.y > 0.05);
    }

    #[test]
    fn slow_contact_does_not_bounce() {
        let g = ground();
        let mut ball = ball_at(0.099);
        ball.velocity = Vec3::new(0.0, -0.05, 0.0);
        let contact = sphere_plane(&ball, &g).unwrap();
        resolve_contact(&mut ball, &g, &contact);
        assert!(ball.velocity.y.abs() < 1e-6);
    }

    #[test]
    fn separating_ball_keeps_velocity() {
        let g = ground();
        let mut ball = ball_at(0.09);
        ball.velocity = Vec3::new(0.0, 1.0, 0.0);
        let contact = sphere_plane(&ball, &g).unwrap();
        resolve_contact(&mut ball, &g, &contact);
        assert_eq!(ball.velocity, Vec3::new(0.0, 1.0, 0.0));
    }
}
