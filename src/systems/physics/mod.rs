//! Rigid-body physics for the placed scene.
//!
//! One static plane, one sphere, gravity, damping and a sphere/plane contact.

mod body;
mod collision;
mod stepper;
mod world;

pub use body::{BallBody, GroundBody};
pub use collision::{resolve_contact, sphere_plane, Contact};
pub use stepper::FixedStepper;
pub use world::PhysicsWorld;
