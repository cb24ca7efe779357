//! Domain types: poses, phases, gestures, feedback colors, config and the
//! events handed back to the host.

pub mod config;
pub mod events;
pub mod gesture;
pub mod highlight;
pub mod phase;
pub mod pose;

pub use config::{BallConfig, HighlightPalette, SceneConfig};
pub use events::SceneEvent;
pub use gesture::{GestureCommand, GestureRecord};
pub use highlight::HighlightColor;
pub use phase::PlacementPhase;
pub use pose::{decompose_pose_buffer, decompose_pose_matrix, Transform, POSE_MATRIX_LEN};
