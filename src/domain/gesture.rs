use glam::Vec3;

use crate::core::{SessionError, SessionResult};

/// A controller select event, queued until the next frame drains it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureCommand {
    /// `selectstart`
    Grab { controller: Vec3 },
    /// `selectend`
    Release { controller: Vec3 },
}

impl GestureCommand {
    pub fn grab(x: f32, y: f32, z: f32) -> SessionResult<Self> {
        Ok(GestureCommand::Grab { controller: finite(x, y, z)? })
    }

    pub fn release(x: f32, y: f32, z: f32) -> SessionResult<Self> {
        Ok(GestureCommand::Release { controller: finite(x, y, z)? })
    }

    pub fn controller(&self) -> Vec3 {
        match *self {
            GestureCommand::Grab { controller } | GestureCommand::Release { controller } => {
                controller
            }
        }
    }
}

fn finite(x: f32, y: f32, z: f32) -> SessionResult<Vec3> {
    let v = Vec3::new(x, y, z);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SessionError::InvalidControllerPosition)
    }
}

/// Endpoints of one pull-back-and-release throw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureRecord {
    /// Ball position when the throw was armed.
    pub grab_position: Option<Vec3>,
    /// Controller position at release.
    pub release_position: Option<Vec3>,
}

impl GestureRecord {
    pub fn arm(&mut self, grab_position: Vec3) {
        self.grab_position = Some(grab_position);
        self.release_position = None;
    }

    /// Record the release and hand back both endpoints, disarming the record.
    pub fn release(&mut self, release_position: Vec3) -> Option<(Vec3, Vec3)> {
        let grab = self.grab_position.take()?;
        self.release_position = Some(release_position);
        Some((grab, release_position))
    }
}
