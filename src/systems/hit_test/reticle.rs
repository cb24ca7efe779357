use crate::domain::Transform;

/// The placement marker: where a press would put the next object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reticle {
    pub pose: Transform,
    pub visible: bool,
    /// Set once the ball is placed; a retired reticle never shows again.
    pub retired: bool,
}

impl Reticle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_at(&mut self, pose: Transform) {
        if self.retired {
            return;
        }
        self.pose = pose;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn retire(&mut self) {
        self.visible = false;
        self.retired = true;
    }

    /// Pose to place an object at, if the reticle is showing.
    pub fn placement_pose(&self) -> Option<Transform> {
        self.visible.then_some(self.pose)
    }
}
