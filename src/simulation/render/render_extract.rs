use crate::domain::events::events_to_json;
use crate::domain::SceneEvent;

use super::SessionCore;

pub(super) fn take_events(session: &mut SessionCore) -> Vec<SceneEvent> {
    std::mem::take(&mut session.events)
}

pub(super) fn take_events_json(session: &mut SessionCore) -> String {
    let events = take_events(session);
    events_to_json(&events)
}

/// Column-major reticle matrix, for a mesh with `matrixAutoUpdate = false`.
pub(super) fn reticle_matrix(session: &SessionCore) -> Vec<f32> {
    session.reticle.pose.to_cols_array().to_vec()
}

/// Current ball material color as `0xRRGGBB`.
pub(super) fn ball_color(session: &SessionCore) -> u32 {
    session.visuals.ball_highlight.rgb(&session.config.highlight)
}
