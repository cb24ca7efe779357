use crate::core::SessionResult;
use crate::domain::GestureCommand;
use crate::systems::interaction::InteractionContext;

use super::SessionCore;

pub(super) fn select_start(session: &mut SessionCore, x: f32, y: f32, z: f32) -> SessionResult<()> {
    session.pending.push_back(GestureCommand::grab(x, y, z)?);
    Ok(())
}

pub(super) fn select_end(session: &mut SessionCore, x: f32, y: f32, z: f32) -> SessionResult<()> {
    session.pending.push_back(GestureCommand::release(x, y, z)?);
    Ok(())
}

/// Feed every queued gesture to the state machine, in arrival order.
/// Returns how many were drained.
pub(super) fn drain_commands(session: &mut SessionCore) -> u32 {
    let mut drained = 0u32;
    while let Some(command) = session.pending.pop_front() {
        let mut ctx = InteractionContext {
            reticle: &mut session.reticle,
            physics: &mut session.physics,
            visuals: &mut session.visuals,
            config: &session.config,
            events: &mut session.events,
        };
        // Phase guards make these unreachable; a bad command must not stall the frame.
        if let Err(e) = session.interaction.handle(command, &mut ctx) {
            log::error!("gesture at {:?} rejected: {}", command.controller(), e);
        }
        drained += 1;
    }
    drained
}
