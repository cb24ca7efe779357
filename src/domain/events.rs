use glam::Vec3;
use serde::Serialize;

/// Outbound notifications for the host scene graph.
///
/// The host drains these once per frame and adds/removes meshes accordingly.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneEvent {
    GroundPlaced { position: Vec3 },
    BallPlaced { position: Vec3 },
    ReticleRetired,
    BallArmed { grab_position: Vec3 },
    BallLaunched { impulse: Vec3 },
}

pub fn events_to_json(events: &[SceneEvent]) -> String {
    // Serializing plain enums of floats cannot fail.
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}
