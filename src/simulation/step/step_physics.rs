use super::SessionCore;

/// Run however many fixed steps the clock says are due. Returns the count.
pub(super) fn step_physics(session: &mut SessionCore) -> u32 {
    let now = session.clock.now_seconds();
    let steps = session.stepper.advance(now);
    for _ in 0..steps {
        session.physics.step();
    }
    steps
}
