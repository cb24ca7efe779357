//! Hit-test reconciliation.
//!
//! The host owns the actual WebXR hit-test source. This side tracks whether one
//! has been asked for and granted, and folds each frame's ordered results into
//! the reticle. Acquisition is one-shot per XR session: the first tracked frame
//! hands out a ticket, the host resolves (or fails) that ticket later, and
//! ending the session cancels whatever is outstanding.

use log::{debug, info, warn};

use crate::core::{SessionError, SessionResult};
use crate::domain::{decompose_pose_buffer, Transform};

use super::reticle::Reticle;

/// Handle for one capability request. Resolving an old ticket after the
/// session it belonged to has ended is rejected.
pub type CapabilityTicket = u32;

/// Ordered hit-test results for one tracked frame. Provider order is
/// priority order; index 0 wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackingFrame {
    pub hits: Vec<Transform>,
}

impl TrackingFrame {
    pub fn new(hits: Vec<Transform>) -> Self {
        Self { hits }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a flat buffer of column-major 4x4 matrices.
    pub fn from_matrix_buffer(buffer: &[f32]) -> SessionResult<Self> {
        Ok(Self { hits: decompose_pose_buffer(buffer)? })
    }

    pub fn best(&self) -> Option<&Transform> {
        self.hits.first()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityState {
    /// Nothing requested in this session yet.
    Idle,
    /// Ticket handed out, waiting for the host.
    Requested(CapabilityTicket),
    /// Host holds a live hit-test source for this ticket.
    Acquired(CapabilityTicket),
    /// Host reported the source cannot be had; stays so until session end.
    Unavailable,
}

impl CapabilityState {
    /// Numeric code handed across the wasm boundary.
    pub fn code(self) -> u8 {
        match self {
            CapabilityState::Idle => 0,
            CapabilityState::Requested(_) => 1,
            CapabilityState::Acquired(_) => 2,
            CapabilityState::Unavailable => 3,
        }
    }
}

pub struct HitTestReconciler {
    state: CapabilityState,
    next_ticket: CapabilityTicket,
}

impl HitTestReconciler {
    pub fn new() -> Self {
        Self {
            state: CapabilityState::Idle,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> CapabilityState {
        self.state
    }

    pub fn is_requested(&self) -> bool {
        !matches!(self.state, CapabilityState::Idle)
    }

    pub fn has_capability(&self) -> bool {
        matches!(self.state, CapabilityState::Acquired(_))
    }

    /// Fold one frame into the reticle.
    ///
    /// `frame` is `None` when the host had no tracking data this tick; the
    /// reticle is left as it was. Returns a freshly issued ticket when this
    /// frame triggered the one-shot capability request.
    pub fn reconcile(
        &mut self,
        frame: Option<&TrackingFrame>,
        reticle: &mut Reticle,
    ) -> Option<CapabilityTicket> {
        let frame = frame?;

        let issued = if self.state == CapabilityState::Idle {
            let ticket = self.next_ticket;
            self.next_ticket = self.next_ticket.wrapping_add(1).max(1);
            self.state = CapabilityState::Requested(ticket);
            debug!("hit-test source requested (ticket {ticket})");
            Some(ticket)
        } else {
            None
        };

        if !self.has_capability() {
            reticle.hide();
            return issued;
        }

        match frame.best() {
            Some(pose) => reticle.show_at(*pose),
            None => reticle.hide(),
        }
        issued
    }

    /// Host finished `requestHitTestSource` for `ticket`.
    pub fn resolve(&mut self, ticket: CapabilityTicket) -> SessionResult<()> {
        match self.state {
            CapabilityState::Requested(pending) if pending == ticket => {
                self.state = CapabilityState::Acquired(ticket);
                info!("hit-test source acquired (ticket {ticket})");
                Ok(())
            }
            _ => {
                warn!("ignoring stale hit-test source for ticket {ticket}");
                Err(SessionError::StaleTicket(ticket))
            }
        }
    }

    /// Host could not obtain a hit-test source for `ticket`.
    pub fn fail(&mut self, ticket: CapabilityTicket) -> SessionResult<()> {
        match self.state {
            CapabilityState::Requested(pending) if pending == ticket => {
                self.state = CapabilityState::Unavailable;
                warn!("hit-test source unavailable; placement disabled for this session");
                Ok(())
            }
            _ => Err(SessionError::StaleTicket(ticket)),
        }
    }

    /// XR session ended: drop the capability, cancel any pending request and
    /// allow the next session to ask again.
    pub fn end_session(&mut self, reticle: &mut Reticle) {
        if let CapabilityState::Requested(ticket) = self.state {
            debug!("cancelling pending hit-test request (ticket {ticket})");
        }
        self.state = CapabilityState::Idle;
        reticle.hide();
    }
}

impl Default for HitTestReconciler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn frame(positions: &[Vec3]) -> TrackingFrame {
        TrackingFrame::new(positions.iter().map(|p| Transform::from_position(*p)).collect())
    }

    fn acquired() -> (HitTestReconciler, Reticle) {
        let mut r = HitTestReconciler::new();
        let mut reticle = Reticle::new();
        let ticket = r.reconcile(Some(&TrackingFrame::empty()), &mut reticle).unwrap();
        r.resolve(ticket).unwrap();
        (r, reticle)
    }

    #[test]
    fn first_tracked_frame_issues_exactly_one_request() {
        let mut r = HitTestReconciler::new();
        let mut reticle = Reticle::new();
        assert_eq!(r.reconcile(None, &mut reticle), None);
        assert!(!r.is_requested());

        let ticket = r.reconcile(Some(&frame(&[Vec3::ZERO])), &mut reticle);
        assert_eq!(ticket, Some(1));
        assert_eq!(r.reconcile(Some(&frame(&[Vec3::ZERO])), &mut reticle), None);
        assert_eq!(r.state(), CapabilityState::Requested(1));
    }

    #[test]
    fn reticle_hidden_until_capability_resolves() {
        let mut r = HitTestReconciler::new();
        let mut reticle = Reticle::new();
        let hits = frame(&[Vec3::X]);
        let ticket = r.reconcile(Some(&hits), &mut reticle).unwrap();
        for _ in 0..5 {
            r.reconcile(Some(&hits), &mut reticle);
            assert!(!reticle.visible);
        }
        r.resolve(ticket).unwrap();
        r.reconcile(Some(&hits), &mut reticle);
        assert!(reticle.visible);
        assert_eq!(reticle.pose.position, Vec3::X);
    }

    #[test]
    fn visibility_tracks_result_count_and_first_result_wins() {
        let (mut r, mut reticle) = acquired();
        let sequence = [
            vec![Vec3::X, Vec3::Y],
            vec![],
            vec![Vec3::Z],
            vec![],
            vec![Vec3::NEG_X, Vec3::X, Vec3::Y],
        ];
        for hits in sequence.iter() {
            r.reconcile(Some(&frame(hits)), &mut reticle);
            assert_eq!(reticle.visible, !hits.is_empty());
            if let Some(first) = hits.first() {
                assert_eq!(reticle.pose.position, *first);
            }
        }
    }

    #[test]
    fn untracked_frame_leaves_reticle_alone() {
        let (mut r, mut reticle) = acquired();
        r.reconcile(Some(&frame(&[Vec3::Y])), &mut reticle);
        r.reconcile(None, &mut reticle);
        assert!(reticle.visible);
        assert_eq!(reticle.pose.position, Vec3::Y);
    }

    #[test]
    fn retired_reticle_never_shows_again() {
        let (mut r, mut reticle) = acquired();
        reticle.retire();
        r.reconcile(Some(&frame(&[Vec3::Y])), &mut reticle);
        assert!(!reticle.visible);
    }

    #[test]
    fn session_end_cancels_and_rearms_the_one_shot() {
        let mut r = HitTestReconciler::new();
        let mut reticle = Reticle::new();
        let old = r.reconcile(Some(&TrackingFrame::empty()), &mut reticle).unwrap();
        r.end_session(&mut reticle);
        assert!(!r.is_requested());
        assert_eq!(r.resolve(old), Err(SessionError::StaleTicket(old)));
        assert!(!r.has_capability());

        let fresh = r.reconcile(Some(&TrackingFrame::empty()), &mut reticle).unwrap();
        assert_ne!(fresh, old);
        r.resolve(fresh).unwrap();
        assert!(r.has_capability());
    }

    #[test]
    fn session_end_drops_acquired_capability() {
        let (mut r, mut reticle) = acquired();
        r.reconcile(Some(&frame(&[Vec3::Y])), &mut reticle);
        r.end_session(&mut reticle);
        assert!(!r.has_capability());
        assert!(!reticle.visible);
    }

    #[test]
    fn failed_acquisition_degrades_without_retry() {
        let mut r = HitTestReconciler::new();
        let mut reticle = Reticle::new();
        let ticket = r.reconcile(Some(&TrackingFrame::empty()), &mut reticle).unwrap();
        r.fail(ticket).unwrap();
        assert_eq!(r.state(), CapabilityState::Unavailable);
        assert_eq!(r.reconcile(Some(&frame(&[Vec3::Y])), &mut reticle), None);
        assert!(!reticle.visible);
    }

    #[test]
    fn matrix_buffer_builds_ordered_frame() {
        let mut buffer = Transform::from_position(Vec3::Z).to_cols_array().to_vec();
        buffer.extend_from_slice(&Transform::from_position(Vec3::X).to_cols_array());
        let f = TrackingFrame::from_matrix_buffer(&buffer).unwrap();
        assert_eq!(f.best().unwrap().position, Vec3::Z);
        assert!(TrackingFrame::from_matrix_buffer(&buffer[..15]).is_err());
    }
}
