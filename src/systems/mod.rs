//! Systems driven once per frame by the session.

pub mod hit_test;
pub mod interaction;
pub mod physics;
pub mod render_sync;
