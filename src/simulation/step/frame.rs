use crate::systems::hit_test::{CapabilityTicket, TrackingFrame};

use super::commands::drain_commands;
use super::step_physics::step_physics;
use super::{PerfTimer, SessionCore};

pub(super) fn frame(
    session: &mut SessionCore,
    tracking: Option<&TrackingFrame>,
) -> Option<CapabilityTicket> {
    let perf_on = session.perf_enabled;
    if perf_on {
        session.perf_stats.reset();
        session.perf_stats.hit_results = tracking.map_or(0, |t| t.hits.len() as u32);
        session.perf_stats.commands_queued = session.pending.len() as u32;
    }
    let frame_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === HIT TEST -> RETICLE ===
    let issued = if perf_on {
        let t0 = PerfTimer::start();
        let issued = session.hit_test.reconcile(tracking, &mut session.reticle);
        session.perf_stats.reconcile_ms = t0.elapsed_ms();
        issued
    } else {
        session.hit_test.reconcile(tracking, &mut session.reticle)
    };
    if let Some(ticket) = issued {
        log::info!("frame {}: requesting hit-test source (ticket {ticket})", session.frame);
    }

    // === GESTURES ===
    // Drained before physics so a launch impulse is integrated this frame.
    if perf_on {
        let t0 = PerfTimer::start();
        session.perf_stats.commands_drained = drain_commands(session);
        session.perf_stats.commands_ms = t0.elapsed_ms();
    } else {
        drain_commands(session);
    }

    // === PHYSICS ===
    if perf_on {
        let t0 = PerfTimer::start();
        session.perf_stats.substeps = step_physics(session);
        session.perf_stats.physics_ms = t0.elapsed_ms();
    } else {
        step_physics(session);
    }

    // === RENDER SYNC ===
    if perf_on {
        let t0 = PerfTimer::start();
        session.visuals.sync(&session.physics, &session.reticle);
        session.perf_stats.sync_ms = t0.elapsed_ms();
    } else {
        session.visuals.sync(&session.physics, &session.reticle);
    }

    if perf_on {
        session.perf_stats.body_count = session.physics.body_count() as u32;
        session.perf_stats.sim_time = session.physics.sim_time();
        session.perf_stats.phase = session.interaction.phase().code() as u32;
        if let Some(start) = frame_start {
            session.perf_stats.frame_ms = start.elapsed_ms();
        }
    }

    session.frame += 1;
    issued
}
